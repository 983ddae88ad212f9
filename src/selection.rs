//! Selection state machine
//!
//! Tracks which item of the [`SelectableSet`] is selected and turns
//! directional intents into index changes. Out-of-range indices are always
//! clamped, never reported.

use crate::item::{Item, ItemId, SelectableSet};
use crate::layout::Viewport;

/// Direction of a relative move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous item, wrapping to the last
    Left,
    /// Next item, wrapping to the first
    Right,
    /// One row up, clamped at the first item
    Up,
    /// One row down, clamped at the last item
    Down,
}

/// Owner of the selection index
#[derive(Debug, Clone)]
pub struct SelectionController {
    set: SelectableSet,
    selected: Option<usize>,
}

impl SelectionController {
    /// Create a controller with nothing selected
    pub fn new(set: SelectableSet) -> Self {
        Self {
            set,
            selected: None,
        }
    }

    /// Select the item at `index`, clamped into range
    ///
    /// Any integer is accepted. Does nothing when the set is empty.
    pub fn select(&mut self, index: isize, animate: bool, viewport: &mut dyn Viewport) {
        if self.set.is_empty() {
            return;
        }

        let last = self.set.len() as isize - 1;
        let index = index.clamp(0, last) as usize;
        self.selected = Some(index);

        if let Some(item) = self.set.get(index) {
            tracing::debug!("Selected tile {} ({:?})", item.id.position(), item.label);
            viewport.bring_into_view(item.id.position(), animate);
        }
    }

    /// Move the selection one step in `direction`
    ///
    /// With nothing selected, selects the first item instead. `Up` and `Down`
    /// ask the viewport for the current column count and clamp at the ends;
    /// `Left` and `Right` wrap around.
    pub fn move_relative(&mut self, direction: Direction, viewport: &mut dyn Viewport) {
        if self.set.is_empty() {
            return;
        }

        let Some(current) = self.selected else {
            self.select(0, true, viewport);
            return;
        };

        let len = self.set.len();
        let next = match direction {
            Direction::Left => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
            Direction::Right => (current + 1) % len,
            Direction::Up => current.saturating_sub(viewport.columns().max(1)),
            Direction::Down => (current + viewport.columns().max(1)).min(len - 1),
        };

        if next != current {
            self.select(next as isize, true, viewport);
        }
    }

    /// Select `id` if it belongs to the selectable set
    ///
    /// Excluded or unknown items are ignored.
    pub fn select_by_item(&mut self, id: ItemId, animate: bool, viewport: &mut dyn Viewport) {
        if let Some(index) = self.set.index_of(id) {
            self.select(index as isize, animate, viewport);
        }
    }

    /// Currently selected item
    pub fn current(&self) -> Option<&Item> {
        self.selected.and_then(|index| self.set.get(index))
    }

    /// Currently selected index into the selectable set
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the tile `id` is the selected one
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.current().map(|item| item.id == id).unwrap_or(false)
    }

    /// The selectable set
    pub fn set(&self) -> &SelectableSet {
        &self.set
    }
}
