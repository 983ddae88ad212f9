//! UI rendering module
//!
//! The wall is drawn in three bands: title, tile grid, help line. The
//! overlay is drawn last, on top of everything. Area helpers are shared with
//! the app so mouse hit-testing uses the same geometry as drawing.

mod grid;
mod helpers;
mod overlay;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::rc::Rc;
use crate::tui::app::App;

// Re-export render functions
pub use grid::render_grid;
pub use overlay::render_overlay;

// Re-export helper functions
pub use helpers::{centered_rect, kind_color};

fn chunks(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Grid
            Constraint::Length(3), // Help text
        ])
        .split(size)
}

/// Area the tile grid is drawn into
pub fn grid_area(size: Rect) -> Rect {
    chunks(size)[1]
}

/// Area of the fullscreen overlay
pub fn overlay_area(size: Rect) -> Rect {
    centered_rect(90, 85, size)
}

/// Area inside the overlay border, where the payload is drawn
pub fn overlay_text_area(size: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(overlay_area(size))
}

/// Area of the overlay's close control, on its top border
pub fn close_control_area(overlay: Rect) -> Rect {
    Rect::new(
        overlay.x + overlay.width.saturating_sub(5),
        overlay.y,
        overlay.width.min(3),
        overlay.height.min(1),
    )
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();
    let chunks = chunks(size);

    let selection = &app.widget.selection;
    let title_text = match selection.selected_index() {
        Some(index) => format!("Screenwall ({}/{})", index + 1, selection.set().len()),
        None => "Screenwall".to_string(),
    };
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_grid(f, app, chunks[1]);

    let help_text = if app.widget.overlay.is_open() {
        "Esc/click outside: Close | ↑↓: Scroll"
    } else {
        "←→↑↓/hjkl: Navigate | Enter/Space/double-click: Open | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);

    render_overlay(f, app);
}
