use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

/// Key hints for each mode, `(key, description)`
fn hints(mode: Mode, filtering: bool) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Navigate if filtering => &[
            ("Esc", "clear filter"),
            ("d", "delete"),
            ("x", "complete"),
            ("!", "urgent"),
            ("?", "help"),
        ],
        Mode::Navigate => &[
            ("a", "add"),
            ("d", "delete"),
            ("u", "undo"),
            ("x", "complete"),
            ("s", "sort"),
            ("!", "urgent"),
            ("p", "process"),
            ("/", "search"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Search => &[("Enter", "keep filter"), ("Esc", "clear")],
        Mode::Add => &[
            ("Tab", "next field"),
            ("\u{2190}\u{2192}", "priority"),
            ("Enter", "add"),
            ("Esc", "cancel"),
        ],
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if app.show_key_hints {
        for (key, desc) in hints(app.mode, !app.search_input.is_empty()) {
            let pair = [
                Span::styled(format!(" {}", key), key_style),
                Span::styled(format!(" {} ", desc), desc_style),
            ];
            // Drop hints that would overflow instead of wrapping
            if spans_width(&spans) + spans_width(&pair) > width {
                break;
            }
            spans.extend(pair);
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
