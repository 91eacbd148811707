use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::spans_width;

/// Render the header: app title on the left, counts on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let (pending, done) = app.board.counts();

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            " Task Manager",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let mut counts = format!("{} pending  {} done", pending, done);
    let urgent = app.board.urgent().len();
    if urgent > 0 {
        counts.push_str(&format!("  {} urgent", urgent));
    }
    let undo = app.board.undo_depth();
    if undo > 0 {
        counts.push_str(&format!("  {} undoable", undo));
    }
    counts.push(' ');

    let used = spans_width(&spans);
    let counts_w = counts.chars().count();
    if used + counts_w < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_counts() {
        let mut app = sample_app();
        app.board.enqueue_urgent("Pay rent");
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(out.contains("Task Manager"));
        assert!(out.ends_with("2 pending  1 done  1 urgent"));
    }

    #[test]
    fn shows_undo_depth() {
        let mut app = sample_app();
        app.board.delete_task("Buy milk").unwrap();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(out.contains("1 pending  1 done  1 undoable"));
    }
}
