use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{AddField, App, Mode};

pub(super) fn handle_add_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Enter => {
            actions::on_add_task(app);
            return;
        }
        _ => {}
    }

    let form = &mut app.add_form;
    match key.code {
        KeyCode::Tab => form.focus(form.field.next()),
        KeyCode::BackTab => form.focus(form.field.prev()),
        code if form.field == AddField::Priority => match code {
            KeyCode::Left | KeyCode::Char('h') => form.priority = form.priority.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                form.priority = form.priority.next()
            }
            _ => {}
        },
        KeyCode::Char(c) => form.insert_char(c),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_home(),
        KeyCode::End => form.move_end(),
        _ => {}
    }
}
