//! Serializable summary of the shell state.
//!
//! Emitted as JSON on `debug` level for each state transition.

use serde::Serialize;

use super::App;
use crate::state::SendAffordance;

/// Point-in-time view of the interaction state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub sidebar_visible: bool,
    pub input_focused: bool,
    pub sending: bool,
    pub text_chars: usize,
    pub send: SendAffordance,
    pub scroll_offset: u16,
}

impl App {
    /// Capture the current interaction state.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            sidebar_visible: self.sidebar.is_visible(),
            input_focused: self.composer.is_focused(),
            sending: self.composer.is_sending(),
            text_chars: self.composer.text().chars().count(),
            send: self.composer.send_affordance(),
            scroll_offset: self.content.scroll().offset(),
        }
    }

    pub(crate) fn log_state_change(&self, action: &str) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        match serde_json::to_string(&self.snapshot()) {
            Ok(state) => tracing::debug!(action, %state, "state change"),
            Err(e) => tracing::warn!(action, error = %e, "failed to serialize state"),
        }
    }
}
