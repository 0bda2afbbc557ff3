//! Hit area system for tap interactions.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to decide what a mouse click does. Later
//! registrations sit on top of earlier ones.

use ratatui::layout::Rect;

use crate::input::Command;

/// A clickable region with an associated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The command to run when this area is clicked
    pub command: Command,
}

impl HitArea {
    /// Create a new hit area with the given rect and command.
    pub fn new(rect: Rect, command: Command) -> Self {
        Self { rect, command }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Cleared at the start of each render pass.
#[derive(Debug, Default, Clone)]
pub struct HitAreaRegistry {
    /// Registered areas in z-order (last = topmost)
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Clear all registered areas.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area on top of the existing ones.
    ///
    /// Empty rects are ignored.
    pub fn register(&mut self, rect: Rect, command: Command) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, command));
    }

    /// Command of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Command> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.command)
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
