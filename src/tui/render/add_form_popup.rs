use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::task::Priority;
use crate::tui::app::{AddField, App};
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

const LABEL_W: usize = 10;

/// Render the add-task form and place the terminal cursor in the focused field
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.add_form;
    let bg = app.theme.background;
    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let value_w = (popup_w as usize).saturating_sub(2 + LABEL_W + 1);

    let label_style = |field: AddField| {
        let style = Style::default().bg(bg);
        if form.field == field {
            style.fg(app.theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            style.fg(app.theme.dim)
        }
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let text_row = |field: AddField, label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!(" {:<w$}", label, w = LABEL_W - 1), label_style(field)),
            Span::styled(unicode::truncate_to_width(value, value_w), value_style),
        ])
    };

    // Priority selector: every choice shown, the current one marked
    let mut priority_spans = vec![Span::styled(
        format!(" {:<w$}", "Priority", w = LABEL_W - 1),
        label_style(AddField::Priority),
    )];
    for priority in Priority::ALL {
        let color = app.theme.priority_color(priority);
        let style = if priority == form.priority {
            Style::default()
                .fg(bg)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(bg)
        };
        priority_spans.push(Span::styled(format!(" {} ", priority), style));
        priority_spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let lines = vec![
        text_row(AddField::Name, "Name", &form.name),
        text_row(AddField::Due, "Due", &form.due),
        Line::from(priority_spans),
    ];

    let overlay_area = centered_rect_fixed(popup_w, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Add Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title_style(Style::default().fg(app.theme.text_bright).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);

    // Terminal cursor inside the focused text field
    if let Some(text) = form.active_text() {
        let row = match form.field {
            AddField::Name => 0,
            _ => 1,
        };
        let col = unicode::display_width(&text[..form.cursor.min(text.len())]).min(value_w);
        frame.set_cursor_position(Position::new(
            overlay_area.x + 1 + LABEL_W as u16 + col as u16,
            overlay_area.y + 1 + row,
        ));
    }
}
