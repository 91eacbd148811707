pub mod add_form_popup;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod notice_popup;
pub mod search_line;
pub mod status_row;
pub mod task_list_view;
pub mod urgent_panel;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use crate::ops::search::find_matches;

use super::app::{App, Mode};

/// Most urgent-queue rows shown before the panel stops growing
const URGENT_PANEL_ROWS: usize = 5;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let urgent_rows = app.board.urgent().len().clamp(1, URGENT_PANEL_ROWS) as u16;

    // Layout: header | search line | task list | urgent panel | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // header
            Constraint::Length(1),               // search line
            Constraint::Min(3),                  // task list
            Constraint::Length(urgent_rows + 2), // urgent queue + borders
            Constraint::Length(1),               // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    search_line::render_search_line(frame, app, chunks[1]);
    task_list_view::render_task_list(frame, app, chunks[2]);
    urgent_panel::render_urgent_panel(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Overlays, last one wins
    if app.mode == Mode::Add {
        add_form_popup::render_add_form(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.notice.is_some() {
        notice_popup::render_notice(frame, app, area);
    }
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in find_matches(re, text) {
        if m.start > last_end {
            spans.push(Span::styled(
                text[last_end..m.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(text[m.clone()].to_string(), highlight_style));
        last_end = m.end;
    }
    if last_end == 0 {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
