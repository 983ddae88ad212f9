// App Tests - Testing key and mouse handling

use super::create_test_app;
use crate::item::ItemId;
use crate::overlay::Payload;
use crate::tui::app::DOUBLE_CLICK;
use crate::tui::ui::{close_control_area, overlay_area};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click_tile(app: &crate::tui::App, position: usize) -> MouseEvent {
    let rect = app.layout.tile_rect(position).expect("Tile should be on screen");
    click(rect.x + 1, rect.y + 1)
}

#[test]
fn test_app_starts_on_first_tile() {
    let app = create_test_app();

    assert_eq!(app.tiles.len(), 4);
    assert_eq!(app.widget.selection.current().unwrap().label, "Alpha");
    assert!(!app.should_quit);
}

#[test]
fn test_keyboard_navigation() {
    let mut app = create_test_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Right), now);
    assert_eq!(app.widget.selection.current().unwrap().label, "Charlie", "No-signal tile is skipped");

    app.handle_key(key(KeyCode::Right), now);
    assert_eq!(app.widget.selection.current().unwrap().label, "Delta");

    app.handle_key(key(KeyCode::Right), now);
    assert_eq!(app.widget.selection.current().unwrap().label, "Alpha", "Should wrap to beginning");
}

#[test]
fn test_quit_only_when_overlay_closed() {
    let mut app = create_test_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Enter), now);
    assert!(app.widget.overlay.is_open());

    app.handle_key(key(KeyCode::Char('q')), now);
    assert!(!app.should_quit, "q is swallowed while the overlay is open");

    app.handle_key(key(KeyCode::Esc), now);
    assert!(!app.widget.overlay.is_open());

    app.handle_key(key(KeyCode::Char('q')), now);
    assert!(app.should_quit);
}

#[test]
fn test_degraded_tile_opens_error_notice() {
    let mut app = create_test_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Left), now);
    assert_eq!(app.widget.selection.current().unwrap().label, "Delta");
    app.handle_key(key(KeyCode::Char(' ')), now);

    let open = app.widget.overlay.open().expect("Overlay should open anyway");
    assert!(matches!(open.payload, Payload::Error { .. }));
}

#[test]
fn test_click_selects_tile() {
    let mut app = create_test_app();
    let now = Instant::now();

    let event = click_tile(&app, 2);
    app.handle_mouse(event, now);
    assert!(app.widget.selection.is_selected(ItemId(2)));
    assert!(!app.widget.overlay.is_open(), "Single click only selects");
}

#[test]
fn test_click_on_no_signal_tile_is_ignored() {
    let mut app = create_test_app();
    let now = Instant::now();

    let event = click_tile(&app, 1);
    app.handle_mouse(event, now);
    app.handle_mouse(event, now);

    assert!(app.widget.selection.is_selected(ItemId(0)));
    assert!(!app.widget.overlay.is_open());
}

#[test]
fn test_double_click_opens_tile() {
    let mut app = create_test_app();
    let now = Instant::now();

    let event = click_tile(&app, 2);
    app.handle_mouse(event, now);
    app.handle_mouse(event, now + Duration::from_millis(100));

    assert_eq!(app.widget.overlay.open().unwrap().item, ItemId(2));
}

#[test]
fn test_slow_clicks_do_not_open() {
    let mut app = create_test_app();
    let now = Instant::now();

    let event = click_tile(&app, 2);
    app.handle_mouse(event, now);
    app.handle_mouse(event, now + DOUBLE_CLICK + Duration::from_millis(1));

    assert!(!app.widget.overlay.is_open());
}

#[test]
fn test_click_outside_overlay_dismisses() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.handle_key(key(KeyCode::Enter), now);

    let overlay = overlay_area(app.size);
    app.handle_mouse(click(overlay.x + 2, overlay.y + 2), now);
    assert!(app.widget.overlay.is_open(), "Click inside keeps the overlay open");

    app.handle_mouse(click(0, 0), now);
    assert!(!app.widget.overlay.is_open());
}

#[test]
fn test_close_control_dismisses() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.handle_key(key(KeyCode::Enter), now);

    let close = close_control_area(overlay_area(app.size));
    app.handle_mouse(click(close.x, close.y), now);

    assert!(!app.widget.overlay.is_open());
}

#[test]
fn test_tick_discards_closed_content() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.handle_key(key(KeyCode::Enter), now);
    app.handle_key(key(KeyCode::Esc), now);

    app.tick(now + Duration::from_millis(100));
    assert!(app.widget.overlay.closing().is_some());

    app.tick(now + Duration::from_millis(300));
    assert!(app.widget.overlay.closing().is_none());
}
