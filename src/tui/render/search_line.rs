use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the search line above the task list
pub fn render_search_line(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" Search: ", label_style)];
    match app.mode {
        Mode::Search => {
            spans.push(Span::styled(
                app.search_input.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            )); // ▌ cursor
        }
        _ if !app.search_input.is_empty() => {
            let shown = app.visible_tasks().len();
            spans.push(Span::styled(
                app.search_input.clone(),
                Style::default().fg(app.theme.text).bg(bg),
            ));
            spans.push(Span::styled(
                format!("  ({} of {})", shown, app.board.tasks().len()),
                label_style,
            ));
        }
        _ => spans.push(Span::styled("/ to filter", label_style)),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn line(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_search_line(frame, app, area))
    }

    #[test]
    fn idle_prompt() {
        let app = sample_app();
        assert_eq!(line(&app), " Search: / to filter");
    }

    #[test]
    fn typing_shows_cursor() {
        let mut app = sample_app();
        app.mode = Mode::Search;
        app.search_input = "mi".into();
        assert_eq!(line(&app), " Search: mi\u{258C}");
    }

    #[test]
    fn kept_filter_shows_match_count() {
        let mut app = sample_app();
        app.search_input = "m".into();
        assert_eq!(line(&app), " Search: m  (2 of 3)");
    }
}
