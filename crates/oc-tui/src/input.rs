//! Input handling - convert key events to commands
//!
//! Letter keys are case-insensitive. `a` moves left while exploring and
//! attacks during a battle.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use oc_core::action::{Command, Direction, InputMode};
use oc_core::object::ItemKind;

/// Convert a key event to a game command for the current mode.
///
/// Returns `None` for keys with no meaning in `mode`; the caller keeps
/// polling.
pub fn key_to_command(key: KeyEvent, mode: InputMode) -> Option<Command> {
    // Raw mode swallows the interrupt signal
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Command::Quit),
            _ => None,
        };
    }

    if key.code == KeyCode::Esc {
        return Some(Command::Quit);
    }

    match mode {
        InputMode::Battle => match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'a' => Some(Command::Attack),
                'q' => Some(Command::Quit),
                _ => None,
            },
            _ => None,
        },
        InputMode::Explore => match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(Command::Move(Direction::Up)),
                's' => Some(Command::Move(Direction::Down)),
                'a' => Some(Command::Move(Direction::Left)),
                'd' => Some(Command::Move(Direction::Right)),
                'i' => Some(Command::Inventory),
                '1' => Some(Command::Use(ItemKind::HpPotion)),
                '2' => Some(Command::Use(ItemKind::MpPotion)),
                'q' => Some(Command::Quit),
                _ => None,
            },
            KeyCode::Up => Some(Command::Move(Direction::Up)),
            KeyCode::Down => Some(Command::Move(Direction::Down)),
            KeyCode::Left => Some(Command::Move(Direction::Left)),
            KeyCode::Right => Some(Command::Move(Direction::Right)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_case_insensitive() {
        for (c, dir) in [
            ('w', Direction::Up),
            ('a', Direction::Left),
            ('s', Direction::Down),
            ('d', Direction::Right),
        ] {
            let expected = Some(Command::Move(dir));
            assert_eq!(key_to_command(key(KeyCode::Char(c)), InputMode::Explore), expected);
            assert_eq!(
                key_to_command(key(KeyCode::Char(c.to_ascii_uppercase())), InputMode::Explore),
                expected
            );
        }
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            key_to_command(key(KeyCode::Left), InputMode::Explore),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Down), InputMode::Explore),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(key_to_command(key(KeyCode::Up), InputMode::Battle), None);
    }

    #[test]
    fn test_a_depends_on_mode() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('a')), InputMode::Explore),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('A')), InputMode::Battle),
            Some(Command::Attack)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('w')), InputMode::Battle), None);
        assert_eq!(key_to_command(key(KeyCode::Char('i')), InputMode::Battle), None);
    }

    #[test]
    fn test_inventory_and_potions() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('i')), InputMode::Explore),
            Some(Command::Inventory)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('1')), InputMode::Explore),
            Some(Command::Use(ItemKind::HpPotion))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Char('2')), InputMode::Explore),
            Some(Command::Use(ItemKind::MpPotion))
        );
    }

    #[test]
    fn test_quit_keys() {
        for mode in [InputMode::Explore, InputMode::Battle] {
            assert_eq!(key_to_command(key(KeyCode::Char('q')), mode), Some(Command::Quit));
            assert_eq!(key_to_command(key(KeyCode::Esc), mode), Some(Command::Quit));
            assert_eq!(
                key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), mode),
                Some(Command::Quit)
            );
        }
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL), InputMode::Explore),
            None
        );
    }
}
