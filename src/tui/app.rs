use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::info;

use crate::io::config_io::{load_config, resolve_config_path};
use crate::io::logging::{LogTarget, init_logging};
use crate::model::config::AppConfig;
use crate::model::task::{Priority, TaskRecord, now_due_date};
use crate::ops::board::Board;
use crate::ops::search::query_regex;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search line; the list filters on every keystroke
    Search,
    /// The add-task form is open
    Add,
}

/// Field of the add-task form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Name,
    Due,
    Priority,
}

impl AddField {
    pub fn next(self) -> AddField {
        match self {
            AddField::Name => AddField::Due,
            AddField::Due => AddField::Priority,
            AddField::Priority => AddField::Name,
        }
    }

    pub fn prev(self) -> AddField {
        match self {
            AddField::Name => AddField::Priority,
            AddField::Due => AddField::Name,
            AddField::Priority => AddField::Due,
        }
    }
}

/// Contents of the add-task form. Values persist between adds, except the
/// name which clears after a successful add.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub name: String,
    pub due: String,
    pub priority: Priority,
    pub field: AddField,
    /// Byte offset of the edit cursor in the focused text field
    pub cursor: usize,
}

impl AddForm {
    pub fn new(priority: Priority) -> Self {
        AddForm {
            name: String::new(),
            due: now_due_date(),
            priority,
            field: AddField::Name,
            cursor: 0,
        }
    }

    /// The focused text field, or None when the priority selector has focus
    pub fn active_text(&self) -> Option<&String> {
        match self.field {
            AddField::Name => Some(&self.name),
            AddField::Due => Some(&self.due),
            AddField::Priority => None,
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            AddField::Name => Some(&mut self.name),
            AddField::Due => Some(&mut self.due),
            AddField::Priority => None,
        }
    }

    /// Move focus, placing the cursor at the end of the new field
    pub fn focus(&mut self, field: AddField) {
        self.field = field;
        self.cursor = self.active_text().map_or(0, String::len);
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.active_text_mut() {
            text.insert(cursor, c);
            self.cursor += c.len_utf8();
        }
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        let Some(text) = self.active_text_mut() else {
            return;
        };
        if let Some(start) = prev_grapheme_boundary(text, cursor) {
            text.replace_range(start..cursor, "");
            self.cursor = start;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        let cursor = self.cursor;
        if let Some(text) = self.active_text_mut()
            && let Some(end) = next_grapheme_boundary(text, cursor)
        {
            text.replace_range(cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self
            .active_text()
            .and_then(|text| prev_grapheme_boundary(text, self.cursor))
        {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self
            .active_text()
            .and_then(|text| next_grapheme_boundary(text, self.cursor))
        {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.active_text().map_or(0, String::len);
    }
}

/// Severity of a popup notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A popup message; any key dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct App {
    pub board: Board,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) task rows
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Search text; the task list shows only matching names while non-empty
    pub search_input: String,
    pub add_form: AddForm,
    pub notice: Option<Notice>,
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            board: Board::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            cursor: 0,
            scroll_offset: 0,
            search_input: String::new(),
            add_form: AddForm::new(config.defaults.priority),
            notice: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
        }
    }

    /// Task rows currently shown, after the search filter
    pub fn visible_tasks(&self) -> Vec<&TaskRecord> {
        self.board.search(&self.search_input)
    }

    /// Name of the task under the cursor
    pub fn selected_name(&self) -> Option<String> {
        self.visible_tasks()
            .get(self.cursor)
            .map(|task| task.name.clone())
    }

    /// Keep the cursor on a visible row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_tasks().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    pub fn notify(&mut self, kind: NoticeKind, title: &str, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            title: title.to_string(),
            message: message.into(),
        });
    }

    /// Matcher for highlighting the search text in rows
    pub fn search_re(&self) -> Option<Regex> {
        query_regex(&self.search_input)
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = resolve_config_path(config_path);
    let config = load_config(&config_path)?;
    init_logging(&config.log, LogTarget::Tui)?;

    let mut app = App::new(&config);
    info!(config = %config_path.display(), "starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.board.tasks().len(), "TUI closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
