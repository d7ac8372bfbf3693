//! Key mapping from terminal events to logical input keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputKey;

/// Map a terminal key code to the logical key the controller tracks.
pub fn map_key(code: KeyCode) -> Option<InputKey> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputKey::Down),

        // Rotate
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputKey::Up),

        // Hard drop
        KeyCode::Char(' ') => Some(InputKey::Space),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputKey::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputKey::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
