//! Input intents and the widget that dispatches them

use crate::config::WallConfig;
use crate::item::{Item, ItemId, SelectableSet};
use crate::layout::Viewport;
use crate::overlay::{Focus, OverlayPresenter};
use crate::selection::{Direction, SelectionController};
use std::time::Instant;

/// Normalized input, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Arrow keys
    Move(Direction),
    /// Open the selected tile
    Activate,
    /// Close the overlay
    Dismiss,
    /// Pointer pressed on a tile
    PointerSelect(ItemId),
    /// Pointer double-pressed on a tile
    PointerActivate(ItemId),
    /// Pointer pressed outside the open overlay
    ClickOutsideOverlay,
}

/// A grid of screens: selection plus overlay
///
/// Owns both state machines. The layout stays outside and is passed into
/// every call that may need to measure or scroll.
#[derive(Debug)]
pub struct GridWidget {
    /// Selection state
    pub selection: SelectionController,
    /// Overlay state
    pub overlay: OverlayPresenter,
}

impl GridWidget {
    /// Build the widget and select the first selectable tile without animation
    pub fn new(items: &[Item], config: &WallConfig, viewport: &mut dyn Viewport) -> Self {
        let mut selection = SelectionController::new(SelectableSet::from_items(items));
        selection.select(0, false, viewport);

        tracing::info!(
            "Wall ready: {} tiles, {} selectable",
            items.len(),
            selection.set().len()
        );

        Self {
            selection,
            overlay: OverlayPresenter::new(config.grace_delay(), config.embed_base_url.clone()),
        }
    }

    /// Apply one intent
    ///
    /// While the overlay is open only dismiss intents act on the widget;
    /// vertical moves scroll a scrollable text payload and everything else is
    /// swallowed. Returns true if anything changed.
    pub fn dispatch(&mut self, intent: Intent, viewport: &mut dyn Viewport, now: Instant) -> bool {
        if self.overlay.is_open() {
            return match intent {
                Intent::Dismiss | Intent::ClickOutsideOverlay => self.overlay.dismiss(now),
                Intent::Move(Direction::Up) => self.overlay.scroll_by(-1),
                Intent::Move(Direction::Down) => self.overlay.scroll_by(1),
                _ => false,
            };
        }

        if self.selection.set().is_empty() {
            return false;
        }

        let before = self.selection.selected_index();
        match intent {
            Intent::Move(direction) => self.selection.move_relative(direction, viewport),
            Intent::PointerSelect(id) => self.selection.select_by_item(id, true, viewport),
            Intent::Activate => return self.activate(None),
            Intent::PointerActivate(id) => return self.activate(Some(id)),
            Intent::Dismiss | Intent::ClickOutsideOverlay => return false,
        }
        self.selection.selected_index() != before
    }

    // Pointer activation only counts on the tile that is already selected.
    fn activate(&mut self, target: Option<ItemId>) -> bool {
        let Some(item) = self.selection.current() else {
            return false;
        };
        if target.is_some_and(|id| id != item.id) {
            return false;
        }

        self.overlay.show(item);
        true
    }

    /// Run deferred overlay teardown
    pub fn tick(&mut self, now: Instant) -> bool {
        self.overlay.tick(now)
    }

    /// Whether the tile `id` should be drawn with focus
    ///
    /// Focus moves to the dismiss control while the overlay is open and
    /// returns to the selected tile when it closes.
    pub fn tile_has_focus(&self, id: ItemId) -> bool {
        self.overlay.focus() == Focus::Grid && self.selection.is_selected(id)
    }
}
