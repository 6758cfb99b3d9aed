mod edit;
mod navigate;
mod picker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_edit;
use navigate::handle_navigate;
use picker::handle_picker;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Help overlay swallows the key that closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_edit(app, key),
        Mode::Picker => handle_picker(app, key),
    }
}

/// Terminals disagree on whether Shift+a arrives as `a`+SHIFT or `A`+SHIFT.
/// Fold both into the uppercase char.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
