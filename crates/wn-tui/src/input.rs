//! Keyboard handling

use crossterm::event::{KeyCode, KeyEvent};

/// Commands the viewer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Generate a fresh layout with a new seed
    Regenerate,
    /// Toggle the agent between Follow and Arrive
    ToggleBehavior,
    /// Move the target marker by (dx, dy) cells
    MoveTarget(i32, i32),
    /// Send the agent toward the target marker
    SendAgent,
}

/// Map a key press to a viewer command
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Regenerate),
        KeyCode::Char('b') => Some(Command::ToggleBehavior),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::SendAgent),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveTarget(-1, 0)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveTarget(1, 0)),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveTarget(0, -1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveTarget(0, 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(key_to_command(key(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            key_to_command(key(KeyCode::Left)),
            Some(Command::MoveTarget(-1, 0))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('j'))),
            Some(Command::MoveTarget(0, 1))
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_to_command(key(KeyCode::Char('z'))), None);
    }
}
