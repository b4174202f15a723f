//! Key mapping from terminal events to engine keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event onto a watched key.
///
/// Letters are case-insensitive so Shift or Caps Lock do not break movement.
/// Ctrl-C is reported as [`Key::Escape`].
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::Escape);
    }

    match key.code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Q),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn is_quit_key(key: Key) -> bool {
    matches!(key, Key::Escape | Key::Q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Right)), Some(Key::Right));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('a'))), Some(Key::A));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('D'))), Some(Key::D));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('W'))), Some(Key::W));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('s'))), Some(Key::S));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char(' '))), Some(Key::Space));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(ctrl_c), Some(Key::Escape));
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('c'))), None);

        assert!(is_quit_key(Key::Escape));
        assert!(is_quit_key(Key::Q));
        assert!(!is_quit_key(Key::Space));
    }
}
