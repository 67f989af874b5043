use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::list_ops;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Any keypress clears a stale status message
    if !matches!(app.mode, Mode::ConfirmQuit) {
        app.status = None;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::ConfirmQuit => handle_confirm_quit(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => {
            if !app.list.is_empty() {
                app.cursor = Some(0);
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if !app.list.is_empty() {
                app.cursor = Some(app.list.len() - 1);
            }
        }
        KeyCode::Char('t') => app.apply(list_ops::move_to_top),
        KeyCode::Char('b') => app.apply(list_ops::move_to_bottom),
        KeyCode::Char('K') | KeyCode::Char('r') => app.apply(list_ops::raise),
        KeyCode::Char('J') | KeyCode::Char('l') => app.apply(list_ops::lower),
        KeyCode::Char('d') | KeyCode::Delete => app.apply(list_ops::remove),
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Insert,
        KeyCode::Char('s') => {
            app.save();
        }
        _ => {}
    }
}

fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => app.commit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_confirm_quit(app: &mut App, key: KeyEvent) {
    match key.code {
        // Save, then quit — unless the save failed, in which case stay so
        // the user sees the error and keeps their list
        KeyCode::Char('y') | KeyCode::Enter => {
            if app.save() {
                app.should_quit = true;
            } else {
                app.mode = Mode::Navigate;
            }
        }
        KeyCode::Char('n') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('c') => {
            app.mode = Mode::Navigate;
            app.status = None;
        }
        _ => {}
    }
}
