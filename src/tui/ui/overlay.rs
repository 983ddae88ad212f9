//! Fullscreen overlay rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::overlay::{wrapped_rows, Focus, OpenOverlay, Payload, TextVariant, TEXT_WRAP};
use crate::tui::app::App;
use super::helpers::kind_color;
use super::{close_control_area, overlay_area, overlay_text_area};

/// Renders the open overlay, or the dimmed closing one during its grace delay
pub fn render_overlay(f: &mut Frame, app: &App) {
    let presenter = &app.widget.overlay;
    let (overlay, closing) = match (presenter.open(), presenter.closing()) {
        (Some(open), _) => (open, false),
        (None, Some(closing)) => (closing, true),
        (None, None) => return,
    };

    let area = overlay_area(f.size());
    if area.width < 6 || area.height < 3 {
        return;
    }

    let accent = if closing {
        Color::DarkGray
    } else {
        overlay.kind.map(kind_color).unwrap_or(Color::Red)
    };

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black))
        .title(format!(
            " {} · {} ",
            overlay.label,
            presenter.styling_class().unwrap_or("overlay")
        ));
    let inner = overlay_text_area(f.size());
    f.render_widget(block, area);

    let close_style = if presenter.focus() == Focus::DismissControl {
        Style::default().fg(Color::Black).bg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };
    f.render_widget(Paragraph::new("[x]").style(close_style), close_control_area(area));

    render_payload(f, overlay, presenter.scroll(), closing, inner);
}

fn render_payload(f: &mut Frame, overlay: &OpenOverlay, scroll: u16, closing: bool, inner: Rect) {
    let dim = |style: Style| if closing { style.fg(Color::DarkGray) } else { style };

    match &overlay.payload {
        Payload::Text {
            variant: TextVariant::Simple,
            body,
        } => {
            // Auto-sized: as tall as the wrapped body, centered vertically.
            let rows = u16::try_from(wrapped_rows(body, inner.width)).unwrap_or(u16::MAX);
            let height = rows.clamp(1, inner.height.max(1)).min(inner.height);
            let rect = Rect::new(
                inner.x,
                inner.y + inner.height.saturating_sub(height) / 2,
                inner.width,
                height,
            );
            let text = Paragraph::new(body.as_str())
                .style(dim(Style::default().fg(Color::White)))
                .alignment(Alignment::Center)
                .wrap(TEXT_WRAP);
            f.render_widget(text, rect);
        }
        Payload::Text {
            variant: TextVariant::Scrollable,
            body,
        } => {
            let text = Paragraph::new(body.as_str())
                .style(dim(Style::default().fg(Color::White)))
                .wrap(TEXT_WRAP)
                .scroll((scroll, 0));
            f.render_widget(text, inner);
        }
        Payload::Image { src, alt } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("[image] {}", alt),
                    dim(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
                )),
                Line::from(""),
                Line::from(Span::styled(src.as_str(), dim(Style::default().fg(Color::Gray)))),
            ];
            render_centered(f, lines, inner);
        }
        Payload::LocalVideo(player) => {
            let lines = vec![
                Line::from(Span::styled(
                    "▶ Local video",
                    dim(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                )),
                Line::from(""),
                Line::from(format!("{} ({})", player.src, player.mime)),
                Line::from(Span::styled(
                    format!(
                        "controls: {} | autoplay: {}",
                        on_off(player.controls),
                        on_off(player.autoplay)
                    ),
                    dim(Style::default().fg(Color::Gray)),
                )),
            ];
            render_centered(f, lines, inner);
        }
        Payload::RemoteVideo(player) => {
            let status = if player.is_playing() { "playing" } else { "stopped" };
            let lines = vec![
                Line::from(Span::styled(
                    "▶ Embedded player",
                    dim(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                )),
                Line::from(""),
                Line::from(player.address().as_str()),
                Line::from(Span::styled(status, dim(Style::default().fg(Color::Gray)))),
            ];
            render_centered(f, lines, inner);
        }
        Payload::Error { notice, reason } => {
            let lines = vec![
                Line::from(Span::styled(
                    notice.as_str(),
                    dim(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                )),
                Line::from(""),
                Line::from(Span::styled(reason.as_str(), Style::default().fg(Color::DarkGray))),
            ];
            render_centered(f, lines, inner);
        }
    }
}

fn render_centered(f: &mut Frame, lines: Vec<Line>, inner: Rect) {
    let height = (lines.len() as u16).min(inner.height);
    let rect = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(height) / 2,
        inner.width,
        height,
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, rect);
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
