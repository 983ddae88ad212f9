//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! The wall itself lives in the library root; this module only maps terminal
//! events onto intents and draws the result.

pub mod app;
pub mod keymap;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use keymap::key_to_intent;
