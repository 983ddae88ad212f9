//! UI helper functions

use crate::content::ContentKind;
use ratatui::{layout::Rect, style::Color};

/// Rectangle covering `percent_x` by `percent_y` of `area`, centered
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Accent color of a content kind
pub fn kind_color(kind: ContentKind) -> Color {
    match kind {
        ContentKind::Text => Color::Green,
        ContentKind::Image => Color::Magenta,
        ContentKind::Video => Color::Yellow,
    }
}
