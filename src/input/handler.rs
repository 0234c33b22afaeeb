use crate::app::AppState;
use crate::domain::Mode;
use crate::events::Effect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle one key press. Global bindings run first, then the handler
/// for the active mode.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Option<Effect> {
    // Interrupt quits on the spot, skipping the save pass
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Add | Mode::Edit => handle_entry_mode(app, key),
        Mode::Notes => handle_notes_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Option<Effect> {
    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            None
        }

        // Reorder
        KeyCode::Char('J') => {
            app.swap_below();
            None
        }
        KeyCode::Char('K') => {
            app.swap_above();
            None
        }

        // Toggle completion
        KeyCode::Char(' ') => {
            app.toggle();
            None
        }

        // Insert after / before / append
        KeyCode::Char('o') => {
            app.goto_add(app.cursor + 1);
            None
        }
        KeyCode::Char('O') => {
            app.goto_add(app.cursor);
            None
        }
        KeyCode::Char('A') => {
            app.goto_add(app.todos.len());
            None
        }

        // Edit selected item
        KeyCode::Char('i') => {
            app.goto_edit();
            None
        }

        // Delete selected item
        KeyCode::Char('D') => {
            app.remove_todo();
            None
        }

        // Open notes for selected item
        KeyCode::Enter => {
            app.goto_notes();
            None
        }

        // Open first referenced ticket in the browser
        KeyCode::Char('x') => app.selected().cloned().map(Effect::OpenTicket),

        // Quit: save, then exit once the completion event lands
        KeyCode::Char('q') => Some(Effect::Save(app.todos.clone())),

        _ => None,
    }
}

/// Handle keys in Add and Edit modes
fn handle_entry_mode(app: &mut AppState, key: KeyEvent) -> Option<Effect> {
    match key.code {
        // Discard edits
        KeyCode::Esc => {
            app.goto_normal();
        }

        // Confirm; an empty buffer leaves mode and state untouched
        KeyCode::Enter => {
            if !app.editor.is_empty() {
                app.commit_text();
                app.goto_normal();
            }
        }

        _ => {
            app.editor.handle_key(key);
        }
    }
    None
}

/// Handle keys in Notes mode
fn handle_notes_mode(app: &mut AppState, key: KeyEvent) -> Option<Effect> {
    match key.code {
        // Leaving notes persists the buffer
        KeyCode::Esc => {
            app.commit_notes();
            app.goto_normal();
        }

        // Enter stays in Notes and starts a new line
        KeyCode::Enter => {
            app.editor.insert_newline();
        }

        _ => {
            app.editor.handle_key(key);
        }
    }
    None
}
