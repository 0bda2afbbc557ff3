//! User actions on the shell.
//!
//! Every action is total: a send that cannot start is reported back as a
//! [`SubmitRejected`] value and leaves the state untouched.

use std::time::Instant;

use tokio::runtime::Handle;

use super::send::spawn_send_completion;
use super::App;
use crate::error::SubmitRejected;
use crate::state::MenuEntry;

impl App {
    /// Show or hide the sidebar (menu button).
    pub fn toggle_sidebar(&mut self) {
        self.toggle_sidebar_at(Instant::now());
    }

    /// [`toggle_sidebar`](Self::toggle_sidebar) with an explicit clock.
    pub fn toggle_sidebar_at(&mut self, now: Instant) {
        self.sidebar.toggle(now);
        self.log_state_change("toggle_sidebar");
        self.mark_dirty();
    }

    /// Hide the sidebar. No-op when already hidden.
    pub fn dismiss_sidebar(&mut self) {
        self.dismiss_sidebar_at(Instant::now());
    }

    /// [`dismiss_sidebar`](Self::dismiss_sidebar) with an explicit clock.
    pub fn dismiss_sidebar_at(&mut self, now: Instant) {
        if self.sidebar.dismiss(now) {
            self.log_state_change("dismiss_sidebar");
            self.mark_dirty();
        }
    }

    /// Blur the text field.
    pub fn dismiss_keyboard(&mut self) {
        if self.composer.is_focused() {
            self.composer.blur();
            self.log_state_change("dismiss_keyboard");
            self.mark_dirty();
        }
    }

    /// Focus the text field.
    pub fn focus_input(&mut self) {
        if !self.composer.is_focused() {
            self.composer.focus();
            self.log_state_change("focus_input");
            self.mark_dirty();
        }
    }

    /// Replace the composer text.
    pub fn update_text(&mut self, new_text: impl Into<String>) {
        self.composer.update_text(new_text);
        self.mark_dirty();
    }

    /// Tap the send affordance.
    ///
    /// Starts the simulated send and returns its id. Outside a tokio
    /// runtime the send is refused with [`SubmitRejected::NoRuntime`].
    pub fn submit(&mut self) -> Result<u64, SubmitRejected> {
        let started = self.composer.check_send().and_then(|()| {
            let runtime = Handle::try_current().map_err(|_| SubmitRejected::NoRuntime)?;
            Ok((runtime, self.composer.begin_send()?))
        });
        let (runtime, ticket) = match started {
            Ok(started) => started,
            Err(reason) => {
                tracing::debug!(%reason, "send ignored");
                return Err(reason);
            }
        };

        tracing::info!("Send: {}", ticket.text);
        let id = ticket.id;
        spawn_send_completion(&runtime, ticket, self.config.send_delay, self.message_tx.clone());
        self.log_state_change("submit");
        self.mark_dirty();
        Ok(id)
    }

    /// Tap the attach affordance. Placeholder: logs only.
    pub fn tap_attach(&mut self) {
        tracing::info!("Attach tapped");
    }

    /// Select a sidebar entry. Placeholder: logs only.
    pub fn select_menu_entry(&mut self, entry: MenuEntry) {
        tracing::info!(entry = entry.label(), "menu entry selected");
    }

    /// Select the highlighted sidebar entry.
    pub fn select_highlighted_entry(&mut self) {
        let entry = self.sidebar.highlighted();
        self.select_menu_entry(entry);
    }

    /// Scroll the content list up. Any scroll blurs the text field.
    pub fn scroll_content_up(&mut self, rows: u16) {
        self.dismiss_keyboard();
        if self.content.scroll_mut().scroll_up(rows) {
            self.mark_dirty();
        }
    }

    /// Scroll the content list down. Any scroll blurs the text field.
    pub fn scroll_content_down(&mut self, rows: u16) {
        self.dismiss_keyboard();
        if self.content.scroll_mut().scroll_down(rows) {
            self.mark_dirty();
        }
    }

    /// Jump to the first item.
    pub fn scroll_content_to_top(&mut self) {
        self.dismiss_keyboard();
        if self.content.scroll_mut().scroll_to_top() {
            self.mark_dirty();
        }
    }

    /// Jump to the last item.
    pub fn scroll_content_to_bottom(&mut self) {
        self.dismiss_keyboard();
        if self.content.scroll_mut().scroll_to_bottom() {
            self.mark_dirty();
        }
    }

    /// Rows moved by a page scroll.
    pub fn page_rows(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}
