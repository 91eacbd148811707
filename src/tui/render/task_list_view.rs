use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::cli::output::format_task_line;
use crate::model::task::TaskRecord;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;
use super::push_highlighted_spans;

/// Render the bordered todo list, one `name | due | priority | status` row per
/// visible task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .title(" Todo List ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title_style(Style::default().fg(app.theme.text_bright).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = app.visible_tasks().len();
    if count == 0 {
        let msg = if app.search_input.is_empty() {
            " No tasks. Press a to add one."
        } else {
            " No matching tasks"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    // Keep the cursor row on screen
    let visible_height = inner.height as usize;
    app.cursor = app.cursor.min(count - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let search_re = app.search_re();
    let tasks = app.visible_tasks();
    let end = count.min(app.scroll_offset + visible_height);
    let lines: Vec<Line> = tasks[app.scroll_offset..end]
        .iter()
        .zip(app.scroll_offset..end)
        .map(|(task, row)| {
            render_task_row(
                app,
                task,
                row == app.cursor,
                inner.width as usize,
                search_re.as_ref(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn render_task_row(
    app: &App,
    task: &TaskRecord,
    is_cursor: bool,
    width: usize,
    search_re: Option<&regex::Regex>,
) -> Line<'static> {
    let row_bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let mut style = Style::default()
        .fg(app.theme.priority_color(task.priority))
        .bg(row_bg);
    if task.is_completed() {
        style = style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::BOLD);
    }
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let marker = if is_cursor { "\u{258E}" } else { " " };
    let mut spans = vec![Span::styled(
        marker,
        Style::default().fg(app.theme.highlight).bg(row_bg),
    )];

    // Only the name is searched, so only the name is highlighted
    let line = format_task_line(task);
    let rest = &line[task.name.len()..];
    let name_room = width.saturating_sub(1 + unicode::display_width(rest));
    let name = unicode::truncate_to_width(&task.name, name_room.max(1));
    push_highlighted_spans(&mut spans, &name, style, match_style, search_re);
    spans.push(Span::styled(rest.to_string(), style));

    // Fill the cursor row across the full width
    let used = spans_width(&spans);
    if is_cursor && used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    Line::from(spans)
}
