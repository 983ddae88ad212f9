//! Screenwall - a grid of screens for the terminal
//!
//! This library provides the core of an interactive "wall" of tiles: a
//! selection state machine that moves across the grid, and an overlay
//! presenter that expands one tile into fullscreen text, image or video
//! content. The `tui` module wires both into a ratatui front-end.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod content;
pub mod intent;
pub mod item;
pub mod layout;
pub mod overlay;
pub mod selection;
pub mod tui;

#[cfg(test)]
mod tests;

pub use content::{Content, ContentError, ContentKind};
pub use intent::{GridWidget, Intent};
pub use item::{Item, ItemId, SelectableSet};
pub use overlay::{OverlayPresenter, OverlayState, Payload};
pub use selection::{Direction, SelectionController};

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter
pub const LOG_ENV: &str = "SCREENWALL_LOG";

/// Result type alias for Screenwall operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Screenwall operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wall manifest could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Tile content could not be presented
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Player address could not be built
    #[error("Invalid address: {0}")]
    Address(#[from] url::ParseError),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging to stdout, for hosts that do not own the terminal
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Initialize logging into a file
///
/// The TUI owns the terminal, so anything written to stdout or stderr would
/// corrupt the screen. Logs go to `path` instead (appended, no ANSI colors).
pub fn init_with_log_file<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))?;

    Ok(())
}
