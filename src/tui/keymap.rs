//! Key bindings

use crate::intent::Intent;
use crate::selection::Direction;
use crossterm::event::{KeyCode, KeyEvent};

/// Map a key press to an intent
///
/// Arrows and h/j/k/l move, Enter and Space open the selected tile, Esc
/// closes the overlay. Everything else is ignored.
pub fn key_to_intent(key: &KeyEvent) -> Option<Intent> {
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => Intent::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Intent::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => Intent::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Intent::Move(Direction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Activate,
        KeyCode::Esc => Intent::Dismiss,
        _ => return None,
    };
    Some(intent)
}
