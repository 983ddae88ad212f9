//! Tile grid rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use crate::item::Item;
use crate::tui::app::App;
use super::helpers::kind_color;

/// Renders every visible tile
pub fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    if app.tiles.is_empty() {
        let empty_msg = Paragraph::new("No screens configured. Add tiles to the manifest.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty_msg, area);
        return;
    }

    for (position, item) in app.tiles.iter().enumerate() {
        if let Some(rect) = app.layout.tile_rect(position) {
            render_tile(f, app, item, rect);
        }
    }
}

fn render_tile(f: &mut Frame, app: &App, item: &Item, rect: Rect) {
    if item.excluded {
        let tile = Paragraph::new(vec![Line::from(""), Line::from("NO SIGNAL")])
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(item.label.as_str()),
            );
        f.render_widget(tile, rect);
        return;
    }

    let selected = app.widget.selection.is_selected(item.id);
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border_type = if app.widget.tile_has_focus(item.id) {
        BorderType::Thick
    } else {
        BorderType::Plain
    };
    let title = if selected {
        format!("→ {}", item.label)
    } else {
        item.label.clone()
    };

    let badge = match item.kind() {
        Some(kind) => Span::styled(
            kind.label(),
            Style::default().fg(kind_color(kind)).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("?", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let tile = Paragraph::new(vec![
        Line::from(badge),
        Line::from(Span::styled(
            item.content.preview(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(tile, rect);
}
