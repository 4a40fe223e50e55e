//! Key mapping for the game screen.
//!
//! Translates crossterm key events into UI-agnostic game inputs. Keys with no
//! meaning map to `GameInput::Other` and never reach the engine.

use crate::engine::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Turn(Direction),
    Restart, // Enter / R, only honoured after game over
    Quit,    // Q / Esc / Ctrl-C
    Other,
}

pub fn map_key(key: KeyEvent) -> GameInput {
    // Windows terminals also report releases
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Left => GameInput::Turn(Direction::Left),
        KeyCode::Up => GameInput::Turn(Direction::Up),
        KeyCode::Right => GameInput::Turn(Direction::Right),
        KeyCode::Down => GameInput::Turn(Direction::Down),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_turn() {
        assert_eq!(map_key(press(KeyCode::Left)), GameInput::Turn(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Turn(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Right)), GameInput::Turn(Direction::Right));
        assert_eq!(map_key(press(KeyCode::Down)), GameInput::Turn(Direction::Down));
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Restart);
        assert_eq!(map_key(press(KeyCode::Char('r'))), GameInput::Restart);
        assert_eq!(map_key(press(KeyCode::Char('R'))), GameInput::Restart);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Char('w'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Tab)), GameInput::Other);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
