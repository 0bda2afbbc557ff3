//! The shell: top-level screen state and logic.
//!
//! [`App`] owns every piece of interaction state (sidebar, composer,
//! content list) and is passed by reference to the render functions.
//! Input handlers and async messages are the only things that mutate it.
//!
//! - [`AppMessage`] - Messages posted back from async tasks
//! - [`ShellSnapshot`] - Serializable summary of the state for logging

mod actions;
mod handlers;
mod messages;
mod send;
mod snapshot;

pub use messages::AppMessage;
pub use snapshot::ShellSnapshot;

use std::time::Instant;

use tokio::sync::mpsc;

use crate::input::{InputContext, KeybindingConfig};
use crate::startup::ShellConfig;
use crate::state::{ComposerState, ContentList, SidebarState};
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    /// Interaction timings and geometry
    pub config: ShellConfig,
    /// Sidebar visibility and reveal animation
    pub sidebar: SidebarState,
    /// Text field, focus and the send in flight
    pub composer: ComposerState,
    /// Static list of placeholder items
    pub content: ContentList,
    /// Tap targets registered by the last render
    pub hit_areas: HitAreaRegistry,
    /// Key to command mapping
    pub keybindings: KeybindingConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed and a frame should be drawn
    pub needs_redraw: bool,
    /// Tick counter for animations (send spinner)
    pub tick_count: u64,
    /// Content viewport height from the last render
    pub viewport_height: u16,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Whether the previous tick was animating
    was_animating: bool,
}

impl App {
    /// Mount the screen.
    pub fn new(config: ShellConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let sidebar = SidebarState::new(config.transition, Instant::now());
        let content = ContentList::new(config.item_count);

        Self {
            config,
            sidebar,
            composer: ComposerState::new(),
            content,
            hit_areas: HitAreaRegistry::new(),
            keybindings: KeybindingConfig::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            viewport_height: 0,
            message_rx: Some(message_rx),
            message_tx,
            was_animating: false,
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Stop the event loop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Which part of the screen currently receives keys.
    pub fn input_context(&self) -> InputContext {
        if self.sidebar.is_visible() {
            InputContext::Sidebar
        } else if self.composer.is_focused() {
            InputContext::Editing
        } else {
            InputContext::Browsing
        }
    }

    /// Whether anything on screen is moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.sidebar.is_animating(now) || self.composer.is_sending()
    }

    /// Advance animation state by one frame.
    ///
    /// Marks the app dirty while animating and for one frame after, so the
    /// settled position is drawn.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let animating = self.is_animating(now);
        if animating || self.was_animating {
            self.mark_dirty();
        }
        self.was_animating = animating;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.composer.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(ShellConfig::default())
    }

    #[test]
    fn test_mount_state() {
        let app = app();
        assert!(!app.sidebar.is_visible());
        assert!(!app.composer.is_focused());
        assert!(!app.composer.is_sending());
        assert_eq!(app.composer.text(), "");
        assert_eq!(app.content.len(), 30);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
    }

    #[test]
    fn test_input_context() {
        let mut app = app();
        assert_eq!(app.input_context(), InputContext::Browsing);
        app.focus_input();
        assert_eq!(app.input_context(), InputContext::Editing);
        app.toggle_sidebar();
        assert_eq!(app.input_context(), InputContext::Sidebar);
        app.dismiss_sidebar();
        assert_eq!(app.input_context(), InputContext::Editing);
    }

    #[test]
    fn test_tick_marks_dirty_while_animating_and_one_frame_after() {
        let mut app = App::new(ShellConfig::default().with_transition(Duration::from_millis(100)));
        let start = Instant::now();
        app.needs_redraw = false;

        app.tick(start);
        assert!(!app.needs_redraw);

        app.toggle_sidebar();
        app.needs_redraw = false;
        app.tick(Instant::now());
        assert!(app.needs_redraw);

        let settled = Instant::now() + Duration::from_secs(1);
        app.needs_redraw = false;
        app.tick(settled);
        assert!(app.needs_redraw, "final settled frame is drawn");

        app.needs_redraw = false;
        app.tick(settled);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.quit();
        assert!(app.should_quit);
    }
}
