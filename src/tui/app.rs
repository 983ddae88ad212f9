//! Main TUI application state and logic

use crate::config::WallConfig;
use crate::intent::{GridWidget, Intent};
use crate::item::{Item, ItemId};
use crate::layout::{GridLayout, Viewport};
use crate::tui::keymap::key_to_intent;
use crate::tui::ui::{close_control_area, grid_area, overlay_area, overlay_text_area};
use crate::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Two presses on the same tile within this window count as a double click
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Application state
pub struct App {
    /// Selection and overlay
    pub widget: GridWidget,
    /// Grid geometry and scroll position
    pub layout: GridLayout,
    /// Every tile in display order, excluded ones included
    pub tiles: Vec<Item>,
    /// Terminal size at the last resize
    pub size: Rect,
    /// Should quit
    pub should_quit: bool,
    /// Last tile pressed, for double click detection
    last_click: Option<(ItemId, Instant)>,
}

impl App {
    /// Create the application from a loaded configuration
    pub fn new(config: &WallConfig) -> Self {
        let tiles = config.build_items();
        let mut layout = GridLayout::new(
            tiles.len(),
            config.tile_min_width,
            config.tile_height,
            config.gap,
            config.fallback_columns,
        );
        let widget = GridWidget::new(&tiles, config, &mut layout);

        Self {
            widget,
            layout,
            tiles,
            size: Rect::default(),
            should_quit: false,
            last_click: None,
        }
    }

    /// Create the application from a manifest on disk
    pub fn from_manifest<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config = WallConfig::load(path)?;
        Ok(Self::new(&config))
    }

    /// Adopt a new terminal size
    pub fn resize(&mut self, size: Rect) {
        if size != self.size {
            self.size = size;
            self.layout.set_area(grid_area(size));
            self.widget.overlay.set_text_area(overlay_text_area(size));
            // Keep the selection visible after the column count changes.
            if let Some(item) = self.widget.selection.current() {
                let position = item.id.position();
                self.layout.bring_into_view(position, false);
            }
        }
    }

    /// Apply an intent
    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> bool {
        self.widget.dispatch(intent, &mut self.layout, now)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let quit = matches!(key.code, KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit && !self.widget.overlay.is_open() {
            self.should_quit = true;
            return;
        }

        if let Some(intent) = key_to_intent(&key) {
            self.dispatch(intent, now);
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);

        if self.widget.overlay.is_open() {
            let overlay = overlay_area(self.size);
            if contains(close_control_area(overlay), x, y) {
                self.dispatch(Intent::Dismiss, now);
            } else if !contains(overlay, x, y) {
                self.dispatch(Intent::ClickOutsideOverlay, now);
            }
            return;
        }

        let Some(item) = self.layout.tile_at(x, y).and_then(|position| self.tiles.get(position)) else {
            self.last_click = None;
            return;
        };
        if item.excluded {
            self.last_click = None;
            return;
        }

        let id = item.id;
        let double = self
            .last_click
            .is_some_and(|(last, at)| last == id && now.duration_since(at) <= DOUBLE_CLICK);

        if double && self.widget.selection.is_selected(id) {
            self.last_click = None;
            self.dispatch(Intent::PointerActivate(id), now);
        } else {
            self.last_click = Some((id, now));
            self.dispatch(Intent::PointerSelect(id), now);
        }
    }

    /// Advance smooth scrolling and deferred teardown
    pub fn tick(&mut self, now: Instant) {
        self.layout.tick();
        self.widget.tick(now);
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
