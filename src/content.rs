//! Typed tile content
//!
//! Each tile's raw description from the wall manifest is resolved into a
//! [`Content`] once, when the wall is built. Anything that cannot be
//! resolved is kept as [`Content::Unresolved`] so the overlay can show a
//! visible error notice for it instead of failing at show time.

use crate::config::TileSpec;
use serde::{Deserialize, Serialize};

/// Kind of content a tile expands into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Rich text
    Text,
    /// Still image
    Image,
    /// Local or embedded remote video
    Video,
}

impl ContentKind {
    /// Parse the manifest's `content_type` attribute
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Styling class applied to the overlay container while this kind is shown
    pub fn overlay_class(&self) -> &'static str {
        match self {
            Self::Text => "text-overlay",
            Self::Image => "image-overlay",
            Self::Video => "video-overlay",
        }
    }

    /// Short label for tile captions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

/// Why a tile's content could not be presented
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Text tile without a text container
    #[error("text tile has no text container")]
    MissingTextContainer,

    /// Image tile without an image reference
    #[error("image tile has no image")]
    MissingImage,

    /// Video tile with neither a local source nor a remote id
    #[error("video tile has no source")]
    NoVideoSource,

    /// Remote video id that cannot be placed in a player address
    #[error("invalid remote video id: {0:?}")]
    InvalidVideoId(String),

    /// `content_type` is not one of text, image, video
    #[error("unknown content type: {0:?}")]
    UnknownContentType(String),
}

/// Text container of a text tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    /// Body, presented verbatim
    pub body: String,
    /// Whether the container scrolls independently
    pub scrollable: bool,
}

/// Image reference of an image tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Image source
    pub src: String,
    /// Alternative text
    pub alt: String,
}

/// Video source of a video tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Local file or URL played by a local player
    Local(String),
    /// Identifier of a remote video played through an embedded player
    Remote(String),
}

/// Resolved content of a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Text content
    Text(TextContent),
    /// Image content
    Image(ImageRef),
    /// Video content
    Video(VideoSource),
    /// Content that failed to resolve
    Unresolved {
        /// Declared kind, if the content type was recognised
        kind: Option<ContentKind>,
        /// Resolution failure
        error: ContentError,
    },
}

impl Content {
    /// Resolve a tile spec into typed content
    pub fn resolve(spec: &TileSpec) -> Self {
        let Some(kind) = ContentKind::parse(&spec.content_type) else {
            return Self::Unresolved {
                kind: None,
                error: ContentError::UnknownContentType(spec.content_type.clone()),
            };
        };

        let resolved = match kind {
            ContentKind::Text => spec
                .text
                .as_ref()
                .map(|text| {
                    Self::Text(TextContent {
                        body: text.body.clone(),
                        scrollable: text.scrollable,
                    })
                })
                .ok_or(ContentError::MissingTextContainer),
            ContentKind::Image => spec
                .image
                .as_ref()
                .filter(|image| !image.src.is_empty())
                .map(|image| {
                    Self::Image(ImageRef {
                        src: image.src.clone(),
                        alt: image.alt.clone(),
                    })
                })
                .ok_or(ContentError::MissingImage),
            ContentKind::Video => resolve_video(spec).map(Self::Video),
        };

        resolved.unwrap_or_else(|error| Self::Unresolved {
            kind: Some(kind),
            error,
        })
    }

    /// Declared kind of this content
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            Self::Text(_) => Some(ContentKind::Text),
            Self::Image(_) => Some(ContentKind::Image),
            Self::Video(_) => Some(ContentKind::Video),
            Self::Unresolved { kind, .. } => *kind,
        }
    }

    /// One-line preview for the tile face
    pub fn preview(&self) -> String {
        match self {
            Self::Text(text) => text.body.lines().next().unwrap_or_default().to_string(),
            Self::Image(image) if !image.alt.is_empty() => image.alt.clone(),
            Self::Image(image) => image.src.clone(),
            Self::Video(VideoSource::Local(src)) => src.clone(),
            Self::Video(VideoSource::Remote(id)) => format!("remote: {}", id),
            Self::Unresolved { error, .. } => error.to_string(),
        }
    }
}

// Empty attributes count as absent; a local source wins over a remote id.
fn resolve_video(spec: &TileSpec) -> Result<VideoSource, ContentError> {
    let local = spec.video_source.as_deref().filter(|s| !s.is_empty());
    let remote = spec.video_id.as_deref().filter(|s| !s.is_empty());

    match (local, remote) {
        (Some(src), _) => Ok(VideoSource::Local(src.to_string())),
        (None, Some(id)) if is_valid_video_id(id) => Ok(VideoSource::Remote(id.to_string())),
        (None, Some(id)) => Err(ContentError::InvalidVideoId(id.to_string())),
        (None, None) => Err(ContentError::NoVideoSource),
    }
}

fn is_valid_video_id(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
