use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("\u{2191}\u{2193}/jk", "Move cursor up/down"),
            ("g/G", "Jump to top/bottom"),
        ],
    ),
    (
        "Tasks",
        &[
            ("a", "Add a task"),
            ("d/Del", "Delete selected task"),
            ("u", "Undo last delete"),
            ("x/Enter", "Mark selected complete"),
            ("s", "Sort by due date"),
        ],
    ),
    (
        "Urgent queue",
        &[
            ("!", "Flag selected as urgent"),
            ("p", "Process next urgent task"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Filter tasks by name"),
            ("Esc", "Clear filter"),
        ],
    ),
    ("", &[("?", "Toggle this help"), ("q", "Quit")]),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        if !title.is_empty() {
            lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        }
        for (key, desc) in *bindings {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
    }

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = centered_rect_fixed(44, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line<'_>>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!(" {:<9}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}
