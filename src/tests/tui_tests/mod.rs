// TUI Tests Module - Testing the public tui module
// - app_tests: key and mouse handling on App
// - keymap_tests: key to intent mapping
// - ui_tests: rendering through a test backend

mod app_tests;
mod keymap_tests;
mod ui_tests;

use crate::config::WallConfig;
use crate::tests::helpers::{image_tile, no_signal_tile, text_tile, video_tile};
use crate::tui::App;
use ratatui::layout::Rect;

/// App over a small mixed wall, sized to 100x30
pub fn create_test_app() -> App {
    let config = WallConfig {
        tiles: vec![
            text_tile("Alpha", "alpha body", false),
            no_signal_tile("Bravo"),
            image_tile("Charlie", "charlie.png", "Charlie cam"),
            video_tile("Delta", None, None),
        ],
        ..Default::default()
    };
    let mut app = App::new(&config);
    app.resize(Rect::new(0, 0, 100, 30));
    app
}
