//! Key mapping from terminal events to maze actions.

use crate::types::MazeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to maze actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MazeAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(MazeAction::Regenerate),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(MazeAction::Reseed),

        KeyCode::Char(' ') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(MazeAction::ToggleAnimation)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(MazeAction::Pause),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(MazeAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(MazeAction::Slower),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_regenerate_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(MazeAction::Regenerate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(MazeAction::Regenerate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(MazeAction::Reseed)
        );
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(MazeAction::ToggleAnimation)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(MazeAction::Pause)
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(MazeAction::Faster)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(MazeAction::Slower)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
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
    }
}
