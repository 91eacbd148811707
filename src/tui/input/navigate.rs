use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{AddField, App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let count = app.visible_tasks().len();

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = count.saturating_sub(1),

        // Task actions
        KeyCode::Char('a') => {
            app.add_form.focus(AddField::Name);
            app.mode = Mode::Add;
        }
        KeyCode::Char('d') | KeyCode::Delete => actions::on_delete_selected(app),
        KeyCode::Char('u') => actions::on_undo(app),
        KeyCode::Char('x') | KeyCode::Enter => actions::on_mark_complete(app),
        KeyCode::Char('s') => actions::on_sort(app),
        KeyCode::Char('!') => actions::on_enqueue_urgent(app),
        KeyCode::Char('p') => actions::on_dequeue_urgent(app),

        // Search
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                actions::on_search_text_changed(app);
            }
        }
        _ => {}
    }
}
