//! Shared test helpers

use crate::config::{ImageSpec, TextSpec, TileSpec};
use crate::item::{Item, SelectableSet};
use crate::layout::Viewport;
use crate::selection::SelectionController;

/// Viewport with a settable column count that records scroll requests
#[derive(Debug, Default)]
pub struct FixedViewport {
    pub columns: usize,
    pub scrolls: Vec<(usize, bool)>,
}

impl FixedViewport {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            scrolls: Vec::new(),
        }
    }
}

impl Viewport for FixedViewport {
    fn columns(&self) -> usize {
        self.columns
    }

    fn bring_into_view(&mut self, position: usize, animate: bool) {
        self.scrolls.push((position, animate));
    }
}

pub fn text_tile(label: &str, body: &str, scrollable: bool) -> TileSpec {
    TileSpec {
        label: label.to_string(),
        content_type: "text".to_string(),
        text: Some(TextSpec {
            body: body.to_string(),
            scrollable,
        }),
        ..Default::default()
    }
}

pub fn image_tile(label: &str, src: &str, alt: &str) -> TileSpec {
    TileSpec {
        label: label.to_string(),
        content_type: "image".to_string(),
        image: Some(ImageSpec {
            src: src.to_string(),
            alt: alt.to_string(),
        }),
        ..Default::default()
    }
}

pub fn video_tile(label: &str, source: Option<&str>, id: Option<&str>) -> TileSpec {
    TileSpec {
        label: label.to_string(),
        content_type: "video".to_string(),
        video_source: source.map(str::to_string),
        video_id: id.map(str::to_string),
        ..Default::default()
    }
}

pub fn no_signal_tile(label: &str) -> TileSpec {
    TileSpec {
        no_signal: true,
        ..text_tile(label, "static", false)
    }
}

/// Resolve specs into items, in order
pub fn build_items(specs: &[TileSpec]) -> Vec<Item> {
    specs
        .iter()
        .enumerate()
        .map(|(position, spec)| Item::from_spec(position, spec))
        .collect()
}

/// `count` plain text tiles labelled T0, T1, ...
pub fn text_tiles(count: usize) -> Vec<TileSpec> {
    (0..count)
        .map(|i| text_tile(&format!("T{}", i), &format!("body {}", i), false))
        .collect()
}

/// Controller over `specs` with the first item selected
pub fn controller(specs: &[TileSpec], viewport: &mut FixedViewport) -> SelectionController {
    let items = build_items(specs);
    let mut controller = SelectionController::new(SelectableSet::from_items(&items));
    controller.select(0, false, viewport);
    controller
}
