//! Sidebar panel and the dimming overlay behind it.
//!
//! The panel is drawn into an off-screen buffer at full width and then the
//! on-screen columns are copied over, so a partly slid-in panel shows its
//! right-hand part exactly as it will look once fully in.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::layout::sidebar_span;
use super::theme::{COLOR_BORDER, COLOR_HEADER, COLOR_SIDEBAR_BG, COLOR_SIDEBAR_HIGHLIGHT};
use crate::app::App;
use crate::input::Command;
use crate::state::MenuEntry;

pub const SIDEBAR_TITLE: &str = "Sidebar";

/// Panel-local row of the title
const TITLE_ROW: u16 = 2;
/// Panel-local row of the divider under the title
const DIVIDER_ROW: u16 = 4;
/// Panel-local row of the first entry
const FIRST_ENTRY_ROW: u16 = 6;
/// Rows between entries
const ENTRY_STRIDE: u16 = 2;

/// Panel-local row of a menu entry.
pub fn entry_row(index: usize) -> u16 {
    FIRST_ENTRY_ROW + ENTRY_STRIDE * index as u16
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let opacity = app.sidebar.overlay_opacity_at(now, &app.config);
    if opacity > 0.0 {
        apply_overlay(frame.buffer_mut(), area, opacity);
    }

    if app.sidebar.overlay_tappable() {
        app.hit_areas.register(area, Command::DismissSidebar);
    }

    let offset = app.config.units_to_columns(app.sidebar.offset_at(now, &app.config));
    let width = app.config.sidebar_columns;
    let Some((visible, clipped)) = sidebar_span(area, offset, width) else {
        return;
    };

    let panel_area = Rect::new(0, 0, width, area.height);
    let mut panel = Buffer::empty(panel_area);
    render_panel(&mut panel, panel_area, app.sidebar.highlighted());

    let screen = frame.buffer_mut();
    for dy in 0..visible.height {
        for dx in 0..visible.width {
            let src = panel.cell((clipped + dx, dy)).cloned();
            if let (Some(src), Some(dst)) = (src, screen.cell_mut((visible.x + dx, visible.y + dy))) {
                *dst = src;
            }
        }
    }

    if app.sidebar.overlay_tappable() {
        app.hit_areas.register(visible, Command::Noop);
        for (i, entry) in MenuEntry::ALL.iter().enumerate() {
            let row = entry_row(i);
            if row < visible.height {
                let rect = Rect::new(visible.x, visible.y + row, visible.width, 1);
                app.hit_areas.register(rect, Command::SelectEntry(*entry));
            }
        }
    }
}

fn render_panel(buf: &mut Buffer, area: Rect, highlighted: MenuEntry) {
    Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_SIDEBAR_BG))
        .render(area, buf);

    let inner_width = area.width.saturating_sub(1);
    let mut put = |row: u16, line: Line| {
        if row < area.height && inner_width > 0 {
            Paragraph::new(line).render(Rect::new(area.x, area.y + row, inner_width, 1), buf);
        }
    };

    put(
        TITLE_ROW,
        Line::from(Span::styled(
            format!("  {}", SIDEBAR_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
    );
    put(
        DIVIDER_ROW,
        Line::from(Span::styled(
            format!(" {}", "─".repeat(inner_width.saturating_sub(2) as usize)),
            Style::default().fg(COLOR_BORDER),
        )),
    );

    for (i, entry) in MenuEntry::ALL.iter().enumerate() {
        let line = if *entry == highlighted {
            Line::from(Span::styled(
                format!("▸ {:<width$}", entry.label(), width = inner_width.saturating_sub(2) as usize),
                Style::default().fg(COLOR_HEADER).bg(COLOR_SIDEBAR_HIGHLIGHT),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}", entry.label()),
                Style::default().fg(COLOR_HEADER),
            ))
        };
        put(entry_row(i), line);
    }
}

/// Darken everything in `area` as if covered by black at `opacity`.
pub fn apply_overlay(buf: &mut Buffer, area: Rect, opacity: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = shade(cell.fg, opacity);
                let bg = shade(cell.bg, opacity);
                cell.set_fg(fg).set_bg(bg);
                cell.modifier.insert(Modifier::DIM);
            }
        }
    }
}

/// Blend a color toward black. Named colors cannot be blended and are
/// left to the DIM modifier.
pub fn shade(color: Color, opacity: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let keep = (1.0 - opacity.clamp(0.0, 1.0)).max(0.0);
            let f = |c: u8| (c as f32 * keep).round() as u8;
            Color::Rgb(f(r), f(g), f(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_rgb() {
        assert_eq!(shade(Color::Rgb(100, 200, 50), 0.4), Color::Rgb(60, 120, 30));
        assert_eq!(shade(Color::Rgb(100, 200, 50), 0.0), Color::Rgb(100, 200, 50));
        assert_eq!(shade(Color::Rgb(100, 200, 50), 1.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_shade_named_colors_untouched() {
        assert_eq!(shade(Color::White, 0.4), Color::White);
        assert_eq!(shade(Color::Reset, 0.4), Color::Reset);
    }

    #[test]
    fn test_apply_overlay_dims_every_cell() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        buf.set_style(area, Style::default().bg(Color::Rgb(10, 10, 10)));
        apply_overlay(&mut buf, area, 0.5);
        for y in 0..2 {
            for x in 0..4 {
                let cell = buf.cell((x, y)).unwrap();
                assert!(cell.modifier.contains(Modifier::DIM));
                assert_eq!(cell.bg, Color::Rgb(5, 5, 5));
            }
        }
    }

    #[test]
    fn test_entry_rows_are_spaced() {
        assert_eq!(entry_row(0), 6);
        assert_eq!(entry_row(1), 8);
        assert_eq!(entry_row(2), 10);
    }

    #[test]
    fn test_panel_lists_entries() {
        let area = Rect::new(0, 0, 20, 14);
        let mut buf = Buffer::empty(area);
        render_panel(&mut buf, area, MenuEntry::Profile);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
                .collect()
        };
        assert!(row(TITLE_ROW).contains("Sidebar"));
        assert!(row(entry_row(0)).contains("Home"));
        assert!(row(entry_row(1)).contains("▸ Profile"));
        assert!(row(entry_row(2)).contains("Settings"));
    }
}
