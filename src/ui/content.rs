//! Content list rendering.
//!
//! Only cards intersecting the viewport are built; each one is three rows
//! of box-drawing text with the label centered.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::CONTENT_PADDING;
use super::theme::{COLOR_CARD_BG, COLOR_CARD_BORDER, COLOR_CARD_TEXT};
use crate::app::App;
use crate::state::ITEM_HEIGHT;

pub fn render_content(frame: &mut Frame, area: Rect, app: &mut App) {
    app.viewport_height = area.height;
    app.content.set_viewport_height(area.height);

    let inner = Rect {
        x: area.x + CONTENT_PADDING.min(area.width),
        width: area.width.saturating_sub(CONTENT_PADDING * 2),
        ..area
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut rows: Vec<Line> = vec![Line::default(); inner.height as usize];
    for visible in app.content.visible_items(inner.height) {
        for k in 0..ITEM_HEIGHT {
            let row = visible.top + k as i32;
            if row < 0 || row >= inner.height as i32 {
                continue;
            }
            rows[row as usize] = card_line(k, visible.item.label(), inner.width);
        }
    }

    frame.render_widget(Paragraph::new(rows), inner);
}

/// Row `k` (0 = top edge, 1 = label, 2 = bottom edge) of a card.
pub fn card_line(k: u16, label: &str, width: u16) -> Line<'static> {
    let border = Style::default().fg(COLOR_CARD_BORDER).bg(COLOR_CARD_BG);
    let text = Style::default().fg(COLOR_CARD_TEXT).bg(COLOR_CARD_BG);

    if width < 4 {
        return if k == 1 {
            Line::from(Span::styled(label.to_string(), text))
        } else {
            Line::default()
        };
    }

    let span = (width - 2) as usize;
    match k {
        0 => Line::from(Span::styled(format!("╭{}╮", "─".repeat(span)), border)),
        2 => Line::from(Span::styled(format!("╰{}╯", "─".repeat(span)), border)),
        _ => {
            let pad = span.saturating_sub(label.width());
            let left = pad / 2;
            let right = pad - left;
            Line::from(vec![
                Span::styled("│", border),
                Span::styled(format!("{}{}{}", " ".repeat(left), label, " ".repeat(right)), text),
                Span::styled("│", border),
            ])
        }
    }
}
