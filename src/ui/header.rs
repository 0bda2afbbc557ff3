//! Header bar: menu button on the leading edge, centered title.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_BAR_BG, COLOR_BORDER, COLOR_HEADER};
use crate::app::App;
use crate::input::Command;

pub const MENU_GLYPH: &str = "☰";
pub const HEADER_TITLE: &str = "Header";

/// Columns of the tappable menu button
const MENU_BUTTON_WIDTH: u16 = 5;

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_BAR_BG));
    frame.render_widget(block, area);

    let row = Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: 1,
        ..area
    };

    let title = Paragraph::new(Span::styled(
        HEADER_TITLE,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, row);

    let button = Rect {
        width: MENU_BUTTON_WIDTH.min(area.width),
        ..area
    };
    let glyph_row = Rect {
        x: row.x + 2,
        width: (MENU_GLYPH.width() as u16).min(row.width.saturating_sub(2)),
        ..row
    };
    frame.render_widget(
        Paragraph::new(Span::styled(MENU_GLYPH, Style::default().fg(COLOR_HEADER))),
        glyph_row,
    );

    app.hit_areas.register(button, Command::ToggleSidebar);
}
