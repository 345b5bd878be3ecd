//! Event handler for the TUI
//!
//! Routes keyboard events to the focused input or the transaction table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::storage::KeyValueStore;

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => {}
        Event::Tick => app.tick(),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus == Focus::Transactions {
        handle_table_key(app, key);
    } else {
        handle_input_key(app, key);
    }
}

/// Handle keys while the transaction table has focus
fn handle_table_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home | KeyCode::Char('g') => app.selected_transaction_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_transaction_index = app.store.transactions().len().saturating_sub(1)
        }
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('i') => app.set_focus(Focus::Income),
        KeyCode::Char('a') => app.set_focus(Focus::Category),
        _ => {}
    }
}

/// Handle keys while one of the text inputs has focus
fn handle_input_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Transactions),
        KeyCode::Enter => {
            if app.focus == Focus::Income {
                app.submit_income();
            } else {
                app.submit_transaction();
            }
        }
        code => {
            let Some(input) = app.focused_input_mut() else {
                return;
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}
