//! Screen layout
//!
//! Splits the frame into header, content and composer bands, and places
//! the sliding sidebar panel.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows used by the header bar (including its bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Rows used by the composer bar (including its top border)
pub const COMPOSER_HEIGHT: u16 = 3;

/// Columns of padding on each side of the content list
pub const CONTENT_PADDING: u16 = 1;

/// The three vertical bands of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub content: Rect,
    pub composer: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect) -> Self {
        let [header, content, composer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(COMPOSER_HEIGHT),
        ])
        .areas(area);

        Self {
            header,
            content,
            composer,
        }
    }
}

/// On-screen part of a panel `width` columns wide whose left edge sits
/// `offset` columns from the left of `area` (negative = off-screen).
///
/// Returns the visible rect and how many panel columns are clipped on the
/// left, or `None` when nothing is visible.
pub fn sidebar_span(area: Rect, offset: i32, width: u16) -> Option<(Rect, u16)> {
    let left = offset.max(0);
    let right = (offset + width as i32).min(area.width as i32);
    if right <= left {
        return None;
    }
    let clipped = (left - offset) as u16;
    let rect = Rect {
        x: area.x + left as u16,
        y: area.y,
        width: (right - left) as u16,
        height: area.height,
    };
    Some((rect, clipped))
}
