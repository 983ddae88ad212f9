//! Grid geometry
//!
//! The selection controller never measures anything itself. It asks a
//! [`Viewport`] how many columns the grid currently has and asks it to bring
//! a tile into view. [`GridLayout`] is the terminal implementation.

use ratatui::layout::Rect;

/// Tile width assumed when the configured minimum width is zero
pub const FALLBACK_TILE_WIDTH: u16 = 24;

/// Layout collaborator of the selection controller
pub trait Viewport {
    /// Approximate number of tiles per row right now, always at least 1
    fn columns(&self) -> usize;

    /// Scroll so the tile at display `position` is visible
    ///
    /// Scrolls to the nearest edge only. `animate` selects smooth scrolling
    /// over an immediate jump.
    fn bring_into_view(&mut self, position: usize, animate: bool);
}

/// Estimate how many tiles fit in one row
///
/// `grid_width` of zero means the grid has not been measured, in which case
/// `fallback` is returned. An empty wall always has one column.
pub fn approximate_columns(
    grid_width: u16,
    tile_min_width: u16,
    gap: u16,
    fallback: usize,
    item_count: usize,
) -> usize {
    if item_count == 0 {
        return 1;
    }
    if grid_width == 0 {
        return fallback.max(1);
    }

    let tile_width = if tile_min_width == 0 {
        FALLBACK_TILE_WIDTH
    } else {
        tile_min_width
    };

    let columns = (grid_width as usize + gap as usize) / (tile_width as usize + gap as usize);
    columns.max(1)
}

/// Terminal grid layout with a vertical scroll position
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Area the grid is drawn into
    pub area: Rect,
    /// Minimum tile width in cells
    pub tile_min_width: u16,
    /// Tile height in rows
    pub tile_height: u16,
    /// Gap between tiles
    pub gap: u16,
    /// Columns assumed before the first measurement
    pub fallback_columns: usize,
    /// Number of tiles drawn, excluded ones included
    pub tile_count: usize,
    /// First visible tile row
    pub scroll_row: usize,
    /// Row the smooth scroll is heading to
    pub target_row: usize,
}

impl GridLayout {
    /// Create an unmeasured layout
    pub fn new(
        tile_count: usize,
        tile_min_width: u16,
        tile_height: u16,
        gap: u16,
        fallback_columns: usize,
    ) -> Self {
        Self {
            area: Rect::default(),
            tile_min_width,
            tile_height: tile_height.max(1),
            gap,
            fallback_columns,
            tile_count,
            scroll_row: 0,
            target_row: 0,
        }
    }

    /// Update the grid area after a resize
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        let max_row = self.max_scroll_row();
        self.scroll_row = self.scroll_row.min(max_row);
        self.target_row = self.target_row.min(max_row);
    }

    /// Number of tile rows that fit in the area
    pub fn visible_rows(&self) -> usize {
        let pitch = self.tile_height as usize + self.gap as usize;
        ((self.area.height as usize + self.gap as usize) / pitch).max(1)
    }

    /// Total number of tile rows
    pub fn total_rows(&self) -> usize {
        self.tile_count.div_ceil(self.columns())
    }

    fn max_scroll_row(&self) -> usize {
        self.total_rows().saturating_sub(self.visible_rows())
    }

    /// Width of one tile in the current layout
    pub fn tile_width(&self) -> u16 {
        let columns = self.columns();
        let gaps = self.gap as usize * (columns - 1);
        let width = (self.area.width as usize).saturating_sub(gaps) / columns;
        width.max(1) as u16
    }

    /// Screen rectangle of the tile at `position`, if it is on screen
    ///
    /// Tiles are clipped to the grid area.
    pub fn tile_rect(&self, position: usize) -> Option<Rect> {
        if position >= self.tile_count {
            return None;
        }

        let columns = self.columns();
        let row = position / columns;
        let column = position % columns;
        if row < self.scroll_row || row >= self.scroll_row + self.visible_rows() {
            return None;
        }

        // Cell arithmetic in usize: a wide gap times a column index overflows u16.
        let width = self.tile_width() as usize;
        let x = self.area.x as usize + column * (width + self.gap as usize);
        let y = self.area.y as usize
            + (row - self.scroll_row) * (self.tile_height as usize + self.gap as usize);
        let right = self.area.right() as usize;
        let bottom = self.area.bottom() as usize;
        if x >= right || y >= bottom {
            return None;
        }

        Some(Rect::new(
            x as u16,
            y as u16,
            width.min(right - x) as u16,
            (self.tile_height as usize).min(bottom - y) as u16,
        ))
    }

    /// Position of the tile under the given cell
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        let first = self.scroll_row * self.columns();
        let last = (first + self.visible_rows() * self.columns()).min(self.tile_count);

        (first..last).find(|&position| {
            self.tile_rect(position)
                .map(|r| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
                .unwrap_or(false)
        })
    }

    /// Advance a smooth scroll by one row
    ///
    /// Returns true if the scroll position changed.
    pub fn tick(&mut self) -> bool {
        if self.scroll_row < self.target_row {
            self.scroll_row += 1;
            true
        } else if self.scroll_row > self.target_row {
            self.scroll_row -= 1;
            true
        } else {
            false
        }
    }
}

impl Viewport for GridLayout {
    fn columns(&self) -> usize {
        approximate_columns(
            self.area.width,
            self.tile_min_width,
            self.gap,
            self.fallback_columns,
            self.tile_count,
        )
    }

    fn bring_into_view(&mut self, position: usize, animate: bool) {
        let row = position / self.columns();
        let visible = self.visible_rows();

        // Nearest edge: only scroll when the row is outside the window.
        let target = if row < self.scroll_row {
            row
        } else if row >= self.scroll_row + visible {
            row + 1 - visible
        } else {
            self.scroll_row
        };

        self.target_row = target;
        if !animate {
            self.scroll_row = target;
        }
    }
}
