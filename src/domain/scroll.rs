//! Scroll state management.
//!
//! [`ScrollState`] tracks a top-anchored row offset into content taller
//! than its viewport. Limits are refreshed from the render pass.

/// Row offset into scrollable content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled past the top of the content
    offset: u16,
    /// Largest valid offset (content height minus viewport height)
    max_scroll: u16,
}

impl ScrollState {
    /// Create a new ScrollState at the top of its content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Largest valid offset.
    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Scroll toward the top of the content.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_up(&mut self, rows: u16) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_sub(rows);
        old != self.offset
    }

    /// Scroll toward the bottom of the content.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_down(&mut self, rows: u16) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_add(rows).min(self.max_scroll);
        old != self.offset
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) -> bool {
        let old = self.offset;
        self.offset = 0;
        old != self.offset
    }

    /// Jump so the last row is at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self) -> bool {
        let old = self.offset;
        self.offset = self.max_scroll;
        old != self.offset
    }

    /// Update limits from the content and viewport heights.
    ///
    /// The offset is clamped if the viewport grew.
    pub fn update_limits(&mut self, content_height: u16, viewport_height: u16) {
        self.max_scroll = content_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_scroll);
    }
}
