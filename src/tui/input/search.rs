use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Keep the filter and go back to the list
        KeyCode::Enter | KeyCode::Down | KeyCode::Up => app.mode = Mode::Navigate,
        // Drop the filter
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            actions::on_search_text_changed(app);
        }
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                actions::on_search_text_changed(app);
            }
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            actions::on_search_text_changed(app);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::config::AppConfig;
    use crate::model::task::Priority;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crossterm::event::KeyCode;

    fn searching(names: &[&str]) -> App {
        let mut app = App::new(&AppConfig::default());
        for name in names {
            app.board
                .add_task(name, "2024-01-01 09:00:00", Priority::Low)
                .unwrap();
        }
        app.mode = Mode::Search;
        app
    }

    fn visible(app: &App) -> Vec<String> {
        app.visible_tasks().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn filters_on_every_keystroke() {
        let mut app = searching(&["Buy milk", "Pay rent", "buy bread"]);
        type_text(&mut app, "b");
        assert_eq!(visible(&app), vec!["Buy milk", "buy bread"]);
        type_text(&mut app, "UY M");
        assert_eq!(visible(&app), vec!["Buy milk"]);
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(visible(&app), vec!["Buy milk", "buy bread"]);
    }

    #[test]
    fn typed_letters_are_not_commands() {
        let mut app = searching(&["Buy milk"]);
        type_text(&mut app, "dq");
        assert!(app.board.tasks().contains("Buy milk"));
        assert!(!app.should_quit);
        assert_eq!(app.search_input, "dq");
    }

    #[test]
    fn enter_keeps_filter_esc_drops_it() {
        let mut app = searching(&["Buy milk", "Pay rent"]);
        type_text(&mut app, "rent");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(visible(&app), vec!["Pay rent"]);

        handle_key(&mut app, ch('/'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(visible(&app).len(), 2);
    }

    #[test]
    fn delete_acts_on_filtered_selection() {
        let mut app = searching(&["Buy milk", "Pay rent"]);
        type_text(&mut app, "rent");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, ch('d'));
        assert!(!app.board.tasks().contains("Pay rent"));
        assert!(app.board.tasks().contains("Buy milk"));
    }
}
