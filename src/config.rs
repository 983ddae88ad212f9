//! Wall manifest and configuration

use crate::item::Item;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted gap between tiles, in cells
pub const MAX_GAP: u16 = 16;

/// Largest accepted tile height, in rows
pub const MAX_TILE_HEIGHT: u16 = 200;

/// Largest accepted minimum tile width, in cells
pub const MAX_TILE_MIN_WIDTH: u16 = 1000;

/// Text container of a tile, as written in the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpec {
    /// Body of the container
    #[serde(default)]
    pub body: String,
    /// Whether the container scrolls independently
    #[serde(default)]
    pub scrollable: bool,
}

/// Image of a tile, as written in the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Image source
    #[serde(default)]
    pub src: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
}

/// One tile of the wall, as written in the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Caption shown on the tile
    #[serde(default)]
    pub label: String,
    /// "No signal" tiles are shown but can never be selected
    #[serde(default)]
    pub no_signal: bool,
    /// One of "text", "image", "video"
    #[serde(default)]
    pub content_type: String,
    /// Text container for text tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpec>,
    /// Image for image tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSpec>,
    /// Local video source for video tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_source: Option<String>,
    /// Remote video id for video tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Wall configuration
///
/// Describes the tiles of the wall plus the few layout and timing knobs the
/// widget needs. Stored as JSON.
///
/// # Example
/// ```rust,no_run
/// use screenwall::config::WallConfig;
///
/// // Load the manifest (returns defaults if the file doesn't exist)
/// let config = WallConfig::load("wall.json").expect("Failed to load");
/// let items = config.build_items();
/// println!("{} tiles, {} ms close delay", items.len(), config.grace_delay_ms);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Tiles in display (row-major) order
    pub tiles: Vec<TileSpec>,
    /// Delay between closing the overlay and discarding its content
    pub grace_delay_ms: u64,
    /// Minimum tile width in terminal cells
    pub tile_min_width: u16,
    /// Tile height in terminal rows
    pub tile_height: u16,
    /// Gap between tiles in cells
    pub gap: u16,
    /// Column count used when the grid has not been measured yet
    pub fallback_columns: usize,
    /// Base address of the embedded remote player
    pub embed_base_url: String,
}

impl WallConfig {
    /// Load the configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the manifest
    ///
    /// # Returns
    /// The loaded configuration, or defaults if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!("No manifest at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read manifest: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse manifest: {}", e)))?;
        config.validate()?;

        tracing::info!("Loaded {} tiles from {}", config.tiles.len(), path.display());
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create manifest directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write manifest: {}", e)))?;

        Ok(())
    }

    /// Check the layout knobs
    pub fn validate(&self) -> Result<()> {
        if self.tile_height == 0 || self.tile_height > MAX_TILE_HEIGHT {
            return Err(Error::Config(format!(
                "tile_height must be between 1 and {}",
                MAX_TILE_HEIGHT
            )));
        }
        if self.tile_min_width > MAX_TILE_MIN_WIDTH {
            return Err(Error::Config(format!(
                "tile_min_width must be at most {}",
                MAX_TILE_MIN_WIDTH
            )));
        }
        if self.gap > MAX_GAP {
            return Err(Error::Config(format!("gap must be at most {}", MAX_GAP)));
        }
        if self.fallback_columns == 0 {
            return Err(Error::Config("fallback_columns must be at least 1".to_string()));
        }
        url::Url::parse(&self.embed_base_url)
            .map_err(|e| Error::Config(format!("Invalid embed_base_url: {}", e)))?;
        Ok(())
    }

    /// Close transition length
    pub fn grace_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.grace_delay_ms)
    }

    /// Resolve every tile into an [`Item`], in display order
    pub fn build_items(&self) -> Vec<Item> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(position, spec)| Item::from_spec(position, spec))
            .collect()
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            grace_delay_ms: 300,
            tile_min_width: 24,
            tile_height: 7,
            gap: 1,
            fallback_columns: 3,
            embed_base_url: "https://www.youtube.com/embed/".to_string(),
        }
    }
}
