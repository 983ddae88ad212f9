// UI Tests - Testing rendering through the ratatui test backend

use super::create_test_app;
use crate::config::WallConfig;
use crate::overlay::wrapped_rows;
use crate::tests::helpers::text_tile;
use crate::tui::ui::{centered_rect, overlay_text_area, ui};
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use std::time::{Duration, Instant};

fn render(app: &App) -> String {
    let backend = TestBackend::new(app.size.width, app.size.height);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
    terminal.draw(|f| ui(f, app)).expect("Failed to draw");

    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_centered_rect() {
    let area = Rect::new(0, 0, 100, 30);
    assert_eq!(centered_rect(90, 85, area), Rect::new(5, 2, 90, 25));
    assert_eq!(centered_rect(100, 100, area), area);
    assert_eq!(centered_rect(0, 0, area), Rect::new(50, 15, 0, 0));
}

#[test]
fn test_grid_shows_tiles() {
    let app = create_test_app();
    let screen = render(&app);

    assert!(screen.contains("Screenwall (1/3)"), "Title should show the selection");
    assert!(screen.contains("Alpha"));
    assert!(screen.contains("NO SIGNAL"));
    assert!(screen.contains("IMAGE"));
    assert!(!screen.contains("Error loading content."));
}

#[test]
fn test_overlay_shows_error_notice() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE), now);
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);

    let screen = render(&app);
    assert!(screen.contains("Error loading content."));
    assert!(screen.contains("video-overlay"));
    assert!(screen.contains("[x]"));
}

#[test]
fn test_overlay_disappears_after_teardown() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
    assert!(render(&app).contains("Alpha · text-overlay"));

    app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), now);
    assert!(render(&app).contains("text-overlay"), "Closing overlay is drawn during the grace delay");

    app.tick(now + Duration::from_secs(1));
    assert!(!render(&app).contains("text-overlay"));
}

fn sized_app(config: &WallConfig) -> App {
    let mut app = App::new(config);
    app.resize(Rect::new(0, 0, 100, 30));
    app
}

fn long_body(words: usize) -> String {
    format!("{}TAILMARKER", "lorem ipsum ".repeat(words))
}

#[test]
fn test_simple_text_overlay_shows_wrapped_tail() {
    let config = WallConfig {
        tiles: vec![text_tile("Essay", &long_body(25), false)],
        ..Default::default()
    };
    let mut app = sized_app(&config);
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), Instant::now());

    let screen = render(&app);
    assert!(screen.contains("lorem ipsum"));
    assert!(screen.contains("TAILMARKER"), "Wrapped rows of a one-line body should all be drawn");
}

#[test]
fn test_scrollable_text_reaches_wrapped_tail() {
    let body = long_body(400);
    let config = WallConfig {
        tiles: vec![text_tile("Log", &body, true)],
        ..Default::default()
    };
    let mut app = sized_app(&config);
    let now = Instant::now();
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
    assert!(!render(&app).contains("TAILMARKER"), "Tail starts below the fold");

    for _ in 0..200 {
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), now);
    }

    let area = overlay_text_area(app.size);
    let expected = wrapped_rows(&body, area.width) - area.height as usize;
    assert!(expected > 0);
    assert_eq!(app.widget.overlay.scroll() as usize, expected, "Scroll stops at the last page");
    assert!(render(&app).contains("TAILMARKER"));
}

#[test]
fn test_render_with_oversized_gap() {
    let config = WallConfig {
        tiles: vec![text_tile("Alpha", "alpha body", false), text_tile("Bravo", "bravo body", false)],
        gap: u16::MAX,
        tile_height: u16::MAX,
        ..Default::default()
    };
    let mut app = sized_app(&config);

    let screen = render(&app);
    assert!(screen.contains("Alpha"));

    let now = Instant::now();
    app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE), now);
    app.tick(now);
    assert!(render(&app).contains("Bravo"), "Selected row is scrolled into view");
}
