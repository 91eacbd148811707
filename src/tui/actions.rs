//! One handler per user action. Each calls into the board and turns the
//! result into a popup notice; no error escapes to the event loop.

use tracing::warn;

use crate::ops::error::TaskError;

use super::app::{AddField, App, Mode, NoticeKind};

/// Submit the add form
pub fn on_add_task(app: &mut App) {
    let form = &app.add_form;
    let result = app
        .board
        .add_task(&form.name, &form.due, form.priority);
    match result {
        Ok(()) => {
            app.add_form.name.clear();
            app.add_form.focus(AddField::Name);
            app.mode = Mode::Navigate;
        }
        Err(TaskError::EmptyInput) => {
            app.notify(NoticeKind::Warning, "Input Error", "Please enter a task.");
        }
        Err(e) => {
            warn!(error = %e, "add rejected");
            app.notify(NoticeKind::Warning, "Input Error", e.to_string());
        }
    }
}

pub fn on_delete_selected(app: &mut App) {
    let Some(name) = app.selected_name() else {
        app.notify(
            NoticeKind::Warning,
            "Selection Error",
            "Please select a task to delete.",
        );
        return;
    };
    match app.board.delete_task(&name) {
        Ok(()) => app.clamp_cursor(),
        Err(e) => {
            warn!(error = %e, "delete failed");
            app.notify(NoticeKind::Warning, "Delete Error", "Task not found.");
        }
    }
}

pub fn on_undo(app: &mut App) {
    match app.board.undo_delete() {
        Ok(_) => app.clamp_cursor(),
        Err(_) => app.notify(NoticeKind::Info, "Undo Error", "No tasks to undo."),
    }
}

pub fn on_mark_complete(app: &mut App) {
    let Some(name) = app.selected_name() else {
        app.notify(
            NoticeKind::Warning,
            "Selection Error",
            "Please select a task to mark complete.",
        );
        return;
    };
    if let Err(e) = app.board.mark_complete(&name) {
        warn!(error = %e, "complete failed");
        app.notify(NoticeKind::Warning, "Error", "Unable to mark as complete.");
    }
}

pub fn on_sort(app: &mut App) {
    match app.board.sort_by_due_date() {
        Ok(()) => app.cursor = 0,
        Err(e) => {
            warn!(error = %e, "sort failed");
            app.notify(NoticeKind::Warning, "Sort Error", e.to_string());
        }
    }
}

pub fn on_enqueue_urgent(app: &mut App) {
    let Some(name) = app.selected_name() else {
        app.notify(
            NoticeKind::Warning,
            "Selection Error",
            "Please select a task to add to urgent queue.",
        );
        return;
    };
    app.board.enqueue_urgent(&name);
}

pub fn on_dequeue_urgent(app: &mut App) {
    match app.board.dequeue_urgent() {
        Ok(name) => app.notify(
            NoticeKind::Info,
            "Urgent Task",
            format!("Processing urgent task: {}", name),
        ),
        Err(_) => app.notify(
            NoticeKind::Info,
            "Queue Empty",
            "No urgent tasks in the queue.",
        ),
    }
}

/// Recompute the filtered view after the search text changed
pub fn on_search_text_changed(app: &mut App) {
    app.cursor = 0;
    app.scroll_offset = 0;
}
