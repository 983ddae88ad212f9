//! Fullscreen overlay presenter
//!
//! Builds the presentation payload for one item and drives the overlay
//! through `Closed -> Open -> Closed`. Closing is immediate; discarding the
//! payload is deferred by a grace delay so an exit transition can still draw
//! it. That deferred teardown is a deadline polled through [`OverlayPresenter::tick`]
//! and is cancelled by the next [`OverlayPresenter::show`].

use crate::content::{Content, ContentKind, VideoSource};
use crate::item::{Item, ItemId};
use crate::{Error, Result};
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};
use std::time::{Duration, Instant};
use url::Url;

/// Notice shown in place of content that could not be presented
pub const ERROR_NOTICE: &str = "Error loading content.";

/// Query parameters of a freshly opened embedded player
pub const EMBED_PARAMS: [(&str, &str); 5] = [
    ("autoplay", "1"),
    ("controls", "1"),
    ("modestbranding", "1"),
    ("rel", "0"),
    ("showinfo", "0"),
];

/// Wrapping of text payloads, shared by drawing and the scroll limit
pub const TEXT_WRAP: Wrap = Wrap { trim: false };

/// Rows `body` takes once wrapped to `width` cells
pub fn wrapped_rows(body: &str, width: u16) -> usize {
    Paragraph::new(body).wrap(TEXT_WRAP).line_count(width)
}

/// How a text payload is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    /// Sized to its content
    Simple,
    /// Fixed box with its own scroll position
    Scrollable,
}

/// Local video player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPlayer {
    /// Source address
    pub src: String,
    /// Source MIME type
    pub mime: &'static str,
    /// Player controls shown
    pub controls: bool,
    /// Starts playing when shown
    pub autoplay: bool,
}

/// Embedded remote video player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPlayer {
    address: Url,
}

impl EmbeddedPlayer {
    /// Build an autoplaying player address for the remote `id`
    ///
    /// The id always becomes a new last path segment, whether or not `base`
    /// ends with a slash.
    pub fn new(base: &str, id: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut address = base.join(id)?;
        address.query_pairs_mut().extend_pairs(EMBED_PARAMS);
        Ok(Self { address })
    }

    /// Current player address
    pub fn address(&self) -> &Url {
        &self.address
    }

    /// Whether the address still asks the player to play
    pub fn is_playing(&self) -> bool {
        self.address
            .query_pairs()
            .any(|(key, value)| key == "autoplay" && value == "1")
    }

    /// Stop playback by resetting the address to its base, without a query
    pub fn stop(&mut self) {
        self.address.set_query(None);
    }
}

/// What the overlay presents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Text body, copied verbatim
    Text {
        /// Layout variant
        variant: TextVariant,
        /// Body
        body: String,
    },
    /// Image
    Image {
        /// Image source
        src: String,
        /// Alternative text
        alt: String,
    },
    /// Local video
    LocalVideo(LocalPlayer),
    /// Embedded remote video
    RemoteVideo(EmbeddedPlayer),
    /// Degraded presentation for content that could not be shown
    Error {
        /// Notice shown to the user
        notice: String,
        /// Diagnostic detail
        reason: String,
    },
}

impl Payload {
    /// Whether this is the degraded presentation
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Content of an open overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOverlay {
    /// Item being presented
    pub item: ItemId,
    /// Item caption
    pub label: String,
    /// Content kind, drives the styling class
    pub kind: Option<ContentKind>,
    /// Presentation
    pub payload: Payload,
}

/// Overlay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    /// Nothing shown
    Closed,
    /// One item shown
    Open(OpenOverlay),
}

/// Where input focus belongs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The tile grid
    Grid,
    /// The overlay's dismiss control
    DismissControl,
}

/// Owner of the overlay state
#[derive(Debug)]
pub struct OverlayPresenter {
    state: OverlayState,
    closing: Option<OpenOverlay>,
    teardown_at: Option<Instant>,
    grace: Duration,
    embed_base: String,
    focus: Focus,
    scroll: u16,
    text_area: Rect,
}

impl OverlayPresenter {
    /// Create a closed presenter
    pub fn new(grace: Duration, embed_base: impl Into<String>) -> Self {
        Self {
            state: OverlayState::Closed,
            closing: None,
            teardown_at: None,
            grace,
            embed_base: embed_base.into(),
            focus: Focus::Grid,
            scroll: 0,
            text_area: Rect::default(),
        }
    }

    /// Adopt the area text payloads are drawn into
    ///
    /// Bounds [`OverlayPresenter::scroll_by`] by the wrapped height of the
    /// body. The current scroll offset is clamped to the new area.
    pub fn set_text_area(&mut self, area: Rect) {
        self.text_area = area;
        if let Some(max) = self.max_scroll() {
            self.scroll = self.scroll.min(max);
        }
    }

    /// Show `item`, replacing whatever is open
    ///
    /// Never fails: content that cannot be built is replaced by the error
    /// notice and the overlay opens anyway.
    pub fn show(&mut self, item: &Item) {
        if let OverlayState::Open(open) = &mut self.state {
            stop_playback(&mut open.payload);
        }

        // A pending teardown would wipe the new content.
        self.teardown_at = None;
        self.closing = None;

        let payload = match self.build_payload(&item.content) {
            Ok(payload) => payload,
            Err(Error::Content(e)) => {
                tracing::warn!("No content for tile {} ({:?}): {}", item.id.position(), item.label, e);
                error_payload(&Error::Content(e))
            }
            Err(e) => {
                tracing::error!("Failed to build overlay for tile {} ({:?}): {}", item.id.position(), item.label, e);
                error_payload(&e)
            }
        };

        tracing::info!(
            "Overlay open: tile {} ({})",
            item.id.position(),
            item.kind().map(|k| k.overlay_class()).unwrap_or("unknown")
        );

        self.state = OverlayState::Open(OpenOverlay {
            item: item.id,
            label: item.label.clone(),
            kind: item.kind(),
            payload,
        });
        self.scroll = 0;
        self.focus = Focus::DismissControl;
    }

    fn build_payload(&self, content: &Content) -> Result<Payload> {
        let payload = match content {
            Content::Text(text) => Payload::Text {
                variant: if text.scrollable {
                    TextVariant::Scrollable
                } else {
                    TextVariant::Simple
                },
                body: text.body.clone(),
            },
            Content::Image(image) => Payload::Image {
                src: image.src.clone(),
                alt: image.alt.clone(),
            },
            Content::Video(VideoSource::Local(src)) => Payload::LocalVideo(LocalPlayer {
                src: src.clone(),
                mime: "video/mp4",
                controls: true,
                autoplay: true,
            }),
            Content::Video(VideoSource::Remote(id)) => {
                Payload::RemoteVideo(EmbeddedPlayer::new(&self.embed_base, id)?)
            }
            Content::Unresolved { error, .. } => return Err(error.clone().into()),
        };
        Ok(payload)
    }

    /// Close the overlay
    ///
    /// Stops remote playback, switches to `Closed` right away and schedules
    /// the payload to be discarded after the grace delay. Returns false if
    /// the overlay was already closed.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        let OverlayState::Open(mut open) = std::mem::replace(&mut self.state, OverlayState::Closed) else {
            return false;
        };

        stop_playback(&mut open.payload);
        tracing::info!("Overlay closed: tile {}", open.item.position());

        self.closing = Some(open);
        self.teardown_at = Some(now + self.grace);
        self.focus = Focus::Grid;
        true
    }

    /// Run the deferred teardown if its deadline has passed
    ///
    /// Returns true if the closing payload was discarded.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.teardown_at {
            Some(deadline) if now >= deadline => {
                self.teardown_at = None;
                self.closing = None;
                tracing::debug!("Overlay content discarded");
                true
            }
            _ => false,
        }
    }

    /// Scroll a scrollable text payload by `delta` lines
    ///
    /// Stops once the last wrapped row reaches the bottom of the text area.
    /// Before any area is known, stops at the last logical line. Returns
    /// false when the open payload does not scroll.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let Some(max) = self.max_scroll() else {
            return false;
        };

        self.scroll = (i64::from(self.scroll) + i64::from(delta)).clamp(0, i64::from(max)) as u16;
        true
    }

    fn max_scroll(&self) -> Option<u16> {
        let OverlayState::Open(OpenOverlay {
            payload: Payload::Text {
                variant: TextVariant::Scrollable,
                body,
            },
            ..
        }) = &self.state
        else {
            return None;
        };

        let max = if self.text_area.width == 0 || self.text_area.height == 0 {
            body.lines().count().saturating_sub(1)
        } else {
            wrapped_rows(body, self.text_area.width).saturating_sub(self.text_area.height as usize)
        };
        Some(u16::try_from(max).unwrap_or(u16::MAX))
    }

    /// Current state
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Whether an overlay is open
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// Content of the open overlay
    pub fn open(&self) -> Option<&OpenOverlay> {
        match &self.state {
            OverlayState::Open(open) => Some(open),
            OverlayState::Closed => None,
        }
    }

    /// Content of a closed overlay still waiting for teardown
    pub fn closing(&self) -> Option<&OpenOverlay> {
        self.closing.as_ref()
    }

    /// Whether a teardown is scheduled
    pub fn teardown_pending(&self) -> bool {
        self.teardown_at.is_some()
    }

    /// Styling class of the overlay container
    ///
    /// Stays set through the grace delay after a dismiss.
    pub fn styling_class(&self) -> Option<&'static str> {
        self.open()
            .or(self.closing.as_ref())
            .and_then(|overlay| overlay.kind)
            .map(|kind| kind.overlay_class())
    }

    /// Where focus belongs
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Scroll offset of a scrollable text payload
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

fn stop_playback(payload: &mut Payload) {
    if let Payload::RemoteVideo(player) = payload {
        player.stop();
    }
}

fn error_payload(error: &Error) -> Payload {
    Payload::Error {
        notice: ERROR_NOTICE.to_string(),
        reason: error.to_string(),
    }
}
