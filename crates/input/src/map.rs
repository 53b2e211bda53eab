//! Key mapping from terminal events to spaceship commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Command produced by a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Quit,
}

/// Map keyboard input to a spaceship command.
///
/// Release events are ignored; key repeat counts as a press.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(KeyCommand::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(KeyCommand::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyCommand::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(KeyCommand::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(KeyCommand::Right),
        KeyCode::Char(' ') => Some(KeyCommand::Fire),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(KeyCommand::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyCommand::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyCommand::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(KeyCommand::Right)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(KeyCommand::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(KeyCommand::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(KeyCommand::Right)
        );
    }

    #[test]
    fn test_fire_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(KeyCommand::Fire)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(KeyCommand::Quit)
        );
    }
}
