use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::AppConfig;
use crate::model::task::Priority;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen at the default test size
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}

/// Build an App holding the given `(name, due, priority)` tasks in order.
pub fn app_with_tasks(tasks: &[(&str, &str, Priority)]) -> App {
    let mut app = App::new(&AppConfig::default());
    for (name, due, priority) in tasks {
        app.board.add_task(name, due, *priority).unwrap();
    }
    app
}

/// A few tasks with mixed priorities and one completed.
pub fn sample_app() -> App {
    let mut app = app_with_tasks(&[
        ("Buy milk", "2024-01-02 10:00:00", Priority::Low),
        ("Pay rent", "2024-01-01 09:00:00", Priority::High),
        ("Call mom", "2024-01-03 18:30:00", Priority::Medium),
    ]);
    app.board.mark_complete("Call mom").unwrap();
    app
}
