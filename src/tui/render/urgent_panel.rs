use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Render the urgent queue, oldest (next to process) first
pub fn render_urgent_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .title(" Urgent Task Queue ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title_style(Style::default().fg(app.theme.text_bright).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let queue = app.board.urgent();
    if queue.is_empty() {
        let empty = Paragraph::new(" (empty)").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    let rows = inner.height as usize;
    let mut lines: Vec<Line> = queue
        .iter()
        .take(rows)
        .enumerate()
        .map(|(i, name)| {
            let style = if i == 0 {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), Style::default().fg(app.theme.dim).bg(bg)),
                Span::styled(name.to_string(), style),
            ])
        })
        .collect();

    // Replace the last row with an overflow count when the queue doesn't fit
    if queue.len() > rows && rows > 0 {
        lines.truncate(rows - 1);
        lines.push(Line::from(Span::styled(
            format!(" +{} more", queue.len() - (rows - 1)),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
