// Keymap Tests - Testing key to intent mapping

use crate::intent::Intent;
use crate::selection::Direction;
use crate::tui::key_to_intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_arrow_keys() {
    assert_eq!(key_to_intent(&key(KeyCode::Left)), Some(Intent::Move(Direction::Left)));
    assert_eq!(key_to_intent(&key(KeyCode::Right)), Some(Intent::Move(Direction::Right)));
    assert_eq!(key_to_intent(&key(KeyCode::Up)), Some(Intent::Move(Direction::Up)));
    assert_eq!(key_to_intent(&key(KeyCode::Down)), Some(Intent::Move(Direction::Down)));
}

#[test]
fn test_vim_keys() {
    assert_eq!(key_to_intent(&key(KeyCode::Char('h'))), Some(Intent::Move(Direction::Left)));
    assert_eq!(key_to_intent(&key(KeyCode::Char('j'))), Some(Intent::Move(Direction::Down)));
    assert_eq!(key_to_intent(&key(KeyCode::Char('k'))), Some(Intent::Move(Direction::Up)));
    assert_eq!(key_to_intent(&key(KeyCode::Char('l'))), Some(Intent::Move(Direction::Right)));
}

#[test]
fn test_activate_and_dismiss_keys() {
    assert_eq!(key_to_intent(&key(KeyCode::Enter)), Some(Intent::Activate));
    assert_eq!(key_to_intent(&key(KeyCode::Char(' '))), Some(Intent::Activate));
    assert_eq!(key_to_intent(&key(KeyCode::Esc)), Some(Intent::Dismiss));
}

#[test]
fn test_unmapped_keys() {
    assert_eq!(key_to_intent(&key(KeyCode::Tab)), None);
    assert_eq!(key_to_intent(&key(KeyCode::Char('x'))), None);
    assert_eq!(key_to_intent(&key(KeyCode::F(5))), None);
}
