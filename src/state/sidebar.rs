//! Sidebar visibility and its derived geometry.
//!
//! The panel offset and the overlay opacity are both functions of a single
//! reveal value (0.0 hidden, 1.0 shown). Showing and hiding run the same
//! transition in opposite directions, so the two always move together and
//! the animation is symmetric.

use std::time::{Duration, Instant};

use crate::domain::Transition;
use crate::startup::ShellConfig;

/// Entries listed in the sidebar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum MenuEntry {
    Home,
    Profile,
    Settings,
}

impl MenuEntry {
    /// All entries in display order.
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Home, MenuEntry::Profile, MenuEntry::Settings];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Home => "Home",
            MenuEntry::Profile => "Profile",
            MenuEntry::Settings => "Settings",
        }
    }
}

/// Panel offset in layout units for a settled visibility.
pub fn sidebar_offset(visible: bool, config: &ShellConfig) -> f32 {
    offset_for_reveal(if visible { 1.0 } else { 0.0 }, config)
}

/// Overlay opacity for a settled visibility.
pub fn overlay_opacity(visible: bool, config: &ShellConfig) -> f32 {
    opacity_for_reveal(if visible { 1.0 } else { 0.0 }, config)
}

fn offset_for_reveal(reveal: f32, config: &ShellConfig) -> f32 {
    config.hidden_offset_units * (1.0 - reveal)
}

fn opacity_for_reveal(reveal: f32, config: &ShellConfig) -> f32 {
    config.overlay_opacity * reveal
}

/// Sidebar visibility plus the running reveal transition.
#[derive(Debug, Clone)]
pub struct SidebarState {
    visible: bool,
    reveal: Transition,
    transition: Duration,
    /// Highlighted entry for keyboard selection
    highlighted: usize,
}

impl SidebarState {
    /// A hidden sidebar.
    pub fn new(transition: Duration, now: Instant) -> Self {
        Self {
            visible: false,
            reveal: Transition::settled(0.0, now),
            transition,
            highlighted: 0,
        }
    }

    /// Whether the sidebar is logically shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility, animating from the current position.
    pub fn toggle(&mut self, now: Instant) {
        self.set_visible(!self.visible, now);
    }

    /// Hide the sidebar.
    ///
    /// Returns false (and leaves any running transition alone) when it is
    /// already hidden.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if !self.visible {
            return false;
        }
        self.set_visible(false, now);
        true
    }

    fn set_visible(&mut self, visible: bool, now: Instant) {
        self.visible = visible;
        let target = if visible { 1.0 } else { 0.0 };
        self.reveal.retarget(target, now, self.transition);
        if visible {
            self.highlighted = 0;
        }
    }

    /// Reveal amount at `now` (0.0 hidden, 1.0 shown).
    pub fn reveal_at(&self, now: Instant) -> f32 {
        self.reveal.value_at(now)
    }

    /// Panel offset in layout units at `now`.
    pub fn offset_at(&self, now: Instant, config: &ShellConfig) -> f32 {
        offset_for_reveal(self.reveal_at(now), config)
    }

    /// Overlay opacity at `now`.
    pub fn overlay_opacity_at(&self, now: Instant, config: &ShellConfig) -> f32 {
        opacity_for_reveal(self.reveal_at(now), config)
    }

    /// Whether the slide is still in progress.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_running(now)
    }

    /// Whether the overlay should accept taps.
    ///
    /// Only while logically visible; a fading-out overlay is inert.
    pub fn overlay_tappable(&self) -> bool {
        self.visible
    }

    /// Currently highlighted entry.
    pub fn highlighted(&self) -> MenuEntry {
        MenuEntry::ALL[self.highlighted]
    }

    /// Move the highlight up, stopping at the first entry.
    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move the highlight down, stopping at the last entry.
    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1).min(MenuEntry::ALL.len() - 1);
    }
}
