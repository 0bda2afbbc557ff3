//! Composer bar: attach button, text field, send button.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::theme::{
    COLOR_ACCENT, COLOR_BAR_BG, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG, COLOR_INPUT_TEXT,
};
use crate::app::App;
use crate::input::Command;
use crate::state::SendGlyph;

pub const ATTACH_GLYPH: &str = "📎";
pub const SEND_GLYPH: &str = "➤";
pub const PLACEHOLDER: &str = "Type a message...";

/// Spinner frames shown on the send button while sending
pub const SENDING_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks each spinner frame stays on screen
const TICKS_PER_FRAME: u64 = 5;

pub fn render_composer(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    // Taps on the bar itself are not "outside the composer".
    app.hit_areas.register(area, Command::Noop);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_BAR_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..inner };

    let [attach, _, field, _, send] = Layout::horizontal([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(5),
    ])
    .areas(row);

    frame.render_widget(
        Paragraph::new(Span::styled(ATTACH_GLYPH, Style::default().fg(COLOR_ACCENT)))
            .centered(),
        attach,
    );
    app.hit_areas.register(attach, Command::Attach);

    render_field(frame, field, app);
    app.hit_areas.register(field, Command::FocusInput);

    render_send_button(frame, send, app);
    app.hit_areas.register(send, Command::Submit);
}

fn render_field(frame: &mut Frame, area: Rect, app: &App) {
    let composer = &app.composer;
    let base = Style::default().bg(COLOR_INPUT_BG);

    if composer.text().is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))
        .style(base);
        frame.render_widget(placeholder, area);
        if composer.is_focused() && !app.sidebar.is_visible() && area.width > 1 {
            frame.set_cursor_position(Position::new(area.x + 1, area.y));
        }
        return;
    }

    // one column of left padding inside the field
    let width = area.width.saturating_sub(1) as usize;
    let (visible, cursor_x) = visible_slice(composer.text(), composer.cursor_display_offset(), width);

    let field = Paragraph::new(Span::styled(
        format!(" {}", visible),
        Style::default().fg(COLOR_INPUT_TEXT),
    ))
    .style(base);
    frame.render_widget(field, area);

    if composer.is_focused() && !app.sidebar.is_visible() {
        let x = area.x + 1 + cursor_x as u16;
        if x < area.right() {
            frame.set_cursor_position(Position::new(x, area.y));
        }
    }
}

/// The part of `text` to show in a field `width` columns wide so that the
/// cursor at display column `cursor_col` stays visible.
///
/// Returns the visible text and the cursor column within it.
pub fn visible_slice(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let skip = (cursor_col + 1).saturating_sub(width);

    let mut skipped = 0;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if skipped < skip {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    (out, cursor_col.saturating_sub(skipped))
}

fn render_send_button(frame: &mut Frame, area: Rect, app: &App) {
    let affordance = app.composer.send_affordance();
    let (glyph, style) = match affordance.glyph {
        SendGlyph::Sending => {
            let idx = (app.tick_count / TICKS_PER_FRAME) as usize % SENDING_FRAMES.len();
            (SENDING_FRAMES[idx], Style::default().fg(COLOR_ACCENT).bg(COLOR_BAR_BG))
        }
        SendGlyph::Idle if affordance.enabled => (
            SEND_GLYPH,
            Style::default().fg(COLOR_INPUT_TEXT).bg(COLOR_ACCENT),
        ),
        SendGlyph::Idle => (SEND_GLYPH, Style::default().fg(COLOR_DIM).bg(COLOR_BAR_BG)),
    };

    frame.render_widget(Paragraph::new(Span::raw(glyph)).centered().style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_slice_fits() {
        assert_eq!(visible_slice("hello", 5, 10), ("hello".to_string(), 5));
        assert_eq!(visible_slice("hello", 2, 10), ("hello".to_string(), 2));
    }

    #[test]
    fn test_visible_slice_scrolls_to_cursor() {
        // cursor at end of a 12-char text in a 5-column field
        let (text, cursor) = visible_slice("abcdefghijkl", 12, 5);
        assert_eq!(text, "ijkl");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_visible_slice_truncates_right() {
        let (text, cursor) = visible_slice("abcdefghijkl", 0, 5);
        assert_eq!(text, "abcde");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_visible_slice_wide_chars() {
        let (text, cursor) = visible_slice("🙂🙂🙂", 6, 4);
        // needs 3 columns skipped; skipping whole chars overshoots to 4
        assert_eq!(text, "🙂");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_visible_slice_zero_width() {
        assert_eq!(visible_slice("abc", 1, 0), (String::new(), 0));
    }

    #[test]
    fn test_sending_frames_differ_from_send_glyph() {
        assert!(!SENDING_FRAMES.contains(&SEND_GLYPH));
    }
}
