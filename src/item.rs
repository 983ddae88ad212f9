//! Wall items and the selectable subset

use crate::config::TileSpec;
use crate::content::{Content, ContentKind};

/// Identity of an item: its position in the full tile collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Display position of the item, counting excluded tiles
    pub fn position(&self) -> usize {
        self.0
    }
}

/// One tile of the wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identity (display position)
    pub id: ItemId,
    /// Caption
    pub label: String,
    /// "No signal" tile, never selectable
    pub excluded: bool,
    /// Resolved content
    pub content: Content,
}

impl Item {
    /// Build an item from its manifest entry at `position`
    pub fn from_spec(position: usize, spec: &TileSpec) -> Self {
        let content = Content::resolve(spec);
        if let Content::Unresolved { error, .. } = &content {
            if !spec.no_signal {
                tracing::warn!("Tile {} ({:?}) has no presentable content: {}", position, spec.label, error);
            }
        }

        Self {
            id: ItemId(position),
            label: spec.label.clone(),
            excluded: spec.no_signal,
            content,
        }
    }

    /// Declared content kind
    pub fn kind(&self) -> Option<ContentKind> {
        self.content.kind()
    }
}

/// Ordered items that can be selected
///
/// Derived once from the full collection by dropping excluded items. The
/// order is the display order and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct SelectableSet {
    items: Vec<Item>,
}

impl SelectableSet {
    /// Derive the selectable set from the full tile collection
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            items: items.iter().filter(|item| !item.excluded).cloned().collect(),
        }
    }

    /// Number of selectable items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing can be selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Index of the item with identity `id`
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
