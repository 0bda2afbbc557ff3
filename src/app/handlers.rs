//! Event handlers: keys, mouse, paste and async messages.
//!
//! Keys and taps both resolve to a [`Command`] and go through
//! [`App::execute`].

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage};
use crate::input::{Command, InputContext};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: u16 = 3;

impl App {
    /// Run a command against the shell.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::ToggleSidebar => self.toggle_sidebar(),
            Command::DismissSidebar => self.dismiss_sidebar(),
            Command::DismissKeyboard => self.dismiss_keyboard(),
            Command::FocusInput => self.focus_input(),

            Command::MenuUp => {
                self.sidebar.highlight_prev();
                self.mark_dirty();
            }
            Command::MenuDown => {
                self.sidebar.highlight_next();
                self.mark_dirty();
            }
            Command::SelectHighlighted => self.select_highlighted_entry(),
            Command::SelectEntry(entry) => self.select_menu_entry(entry),

            Command::InsertChar(c) => {
                self.composer.insert_char(c);
                self.mark_dirty();
            }
            Command::Backspace => {
                if self.composer.backspace() {
                    self.mark_dirty();
                }
            }
            Command::DeleteChar => {
                if self.composer.delete_char() {
                    self.mark_dirty();
                }
            }
            Command::CursorLeft => {
                self.composer.move_cursor_left();
                self.mark_dirty();
            }
            Command::CursorRight => {
                self.composer.move_cursor_right();
                self.mark_dirty();
            }
            Command::CursorHome => {
                self.composer.move_cursor_home();
                self.mark_dirty();
            }
            Command::CursorEnd => {
                self.composer.move_cursor_end();
                self.mark_dirty();
            }
            Command::Submit => {
                let _ = self.submit();
            }
            Command::Attach => self.tap_attach(),

            Command::ScrollUp(rows) => self.scroll_content_up(rows),
            Command::ScrollDown(rows) => self.scroll_content_down(rows),
            Command::ScrollPageUp => self.scroll_content_up(self.page_rows()),
            Command::ScrollPageDown => self.scroll_content_down(self.page_rows()),
            Command::ScrollToTop => self.scroll_content_to_top(),
            Command::ScrollToBottom => self.scroll_content_to_bottom(),

            Command::Noop => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let context = self.input_context();
        if let Some(command) = self.keybindings.resolve(&key, context) {
            self.execute(command);
        }
    }

    /// Handle a mouse event.
    ///
    /// Left clicks are taps resolved through the hit areas from the last
    /// render. The wheel scrolls the list unless the overlay is up.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_tap(mouse.column, mouse.row),
            MouseEventKind::ScrollUp if !self.sidebar.is_visible() => {
                self.execute(Command::ScrollUp(WHEEL_ROWS));
            }
            MouseEventKind::ScrollDown if !self.sidebar.is_visible() => {
                self.execute(Command::ScrollDown(WHEEL_ROWS));
            }
            _ => {}
        }
    }

    /// Handle a tap at a screen position.
    pub fn handle_tap(&mut self, x: u16, y: u16) {
        if let Some(command) = self.hit_areas.hit_test(x, y) {
            tracing::trace!(x, y, ?command, "tap");
            self.execute(command);
        }
    }

    /// Handle bracketed paste. Only reaches a focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.input_context() == InputContext::Editing {
            self.composer.insert_str(text);
            self.mark_dirty();
        }
    }

    /// Handle a message posted by an async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SendCompleted { send_id } => {
                if self.composer.complete_send(send_id) {
                    self.log_state_change("send_completed");
                    self.mark_dirty();
                } else {
                    tracing::debug!(send_id, "stale send completion ignored");
                }
            }
        }
    }
}
