//! Composer state: the message text field and its send affordance.
//!
//! A send is represented by an [`InFlightSend`] holding a cancellation
//! token. `sending` is true exactly while one exists, so a second send
//! cannot start until the first one has completed.

use tokio_util::sync::CancellationToken;
use unicode_width::UnicodeWidthStr;

use crate::error::SubmitRejected;

/// Glyph shown on the send affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SendGlyph {
    /// Paper-plane glyph.
    Idle,
    /// Alternate glyph shown while a send is in flight.
    Sending,
}

/// Render-facing view of the send button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SendAffordance {
    pub enabled: bool,
    pub glyph: SendGlyph,
}

/// A send that has started and not yet completed.
#[derive(Debug)]
pub struct InFlightSend {
    id: u64,
    token: CancellationToken,
}

impl InFlightSend {
    /// Identifier matched against the completion message.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Handed to the task that finishes the send.
#[derive(Debug, Clone)]
pub struct SendTicket {
    pub id: u64,
    pub text: String,
    pub token: CancellationToken,
}

#[derive(Debug, Default)]
pub struct ComposerState {
    text: String,
    /// Cursor position as a byte offset into `text`, always on a char boundary
    cursor: usize,
    input_focused: bool,
    in_flight: Option<InFlightSend>,
    next_send_id: u64,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the cursor into [`text`](Self::text).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_display_offset(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn is_focused(&self) -> bool {
        self.input_focused
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Id of the send in flight, if any.
    pub fn in_flight_id(&self) -> Option<u64> {
        self.in_flight.as_ref().map(InFlightSend::id)
    }

    /// Whether tapping send would start a send.
    pub fn can_send(&self) -> bool {
        self.check_send().is_ok()
    }

    /// Why a send would be refused right now, if it would be.
    pub fn check_send(&self) -> Result<(), SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::AlreadySending);
        }
        if self.text.is_empty() {
            return Err(SubmitRejected::EmptyText);
        }
        Ok(())
    }

    pub fn send_affordance(&self) -> SendAffordance {
        SendAffordance {
            enabled: self.can_send(),
            glyph: if self.is_sending() {
                SendGlyph::Sending
            } else {
                SendGlyph::Idle
            },
        }
    }

    pub fn focus(&mut self) {
        self.input_focused = true;
    }

    pub fn blur(&mut self) {
        self.input_focused = false;
    }

    /// Replace the whole text; the cursor moves to the end.
    pub fn update_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor, dropping control chars.
    pub fn insert_str(&mut self, s: &str) {
        let filtered: String = s.chars().filter(|c| !c.is_control()).collect();
        self.text.insert_str(self.cursor, &filtered);
        self.cursor += filtered.len();
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) -> bool {
        match self.prev_char_len() {
            Some(len) => {
                self.cursor -= len;
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Delete the char under the cursor.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor -= len;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Start a send.
    ///
    /// Refused without any state change when the text is empty or a send
    /// is already in flight.
    pub fn begin_send(&mut self) -> Result<SendTicket, SubmitRejected> {
        self.check_send()?;

        self.next_send_id += 1;
        let id = self.next_send_id;
        let token = CancellationToken::new();
        self.in_flight = Some(InFlightSend {
            id,
            token: token.clone(),
        });

        Ok(SendTicket {
            id,
            text: self.text.clone(),
            token,
        })
    }

    /// Finish the send with the given id.
    ///
    /// Clears the text and focus. Ignored (returns false) when `id` is not
    /// the send in flight.
    pub fn complete_send(&mut self, id: u64) -> bool {
        if self.in_flight_id() != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.text.clear();
        self.cursor = 0;
        self.input_focused = false;
        true
    }

    /// Cancel the send in flight without completing it.
    pub fn cancel_in_flight(&mut self) {
        if let Some(send) = self.in_flight.take() {
            send.token.cancel();
        }
    }

    fn prev_char_len(&self) -> Option<usize> {
        self.text[..self.cursor].chars().next_back().map(char::len_utf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text(text: &str) -> ComposerState {
        let mut state = ComposerState::new();
        state.update_text(text);
        state
    }

    #[test]
    fn test_send_enabled_tracks_text() {
        for s in ["", "a", "hello", " ", "héllo wörld", "🙂"] {
            let state = with_text(s);
            assert_eq!(state.send_affordance().enabled, !s.is_empty(), "text {s:?}");
        }
    }

    #[test]
    fn test_begin_send_rejects_empty_text_without_change() {
        let mut state = ComposerState::new();
        state.focus();
        assert_eq!(state.begin_send().unwrap_err(), SubmitRejected::EmptyText);
        assert!(!state.is_sending());
        assert!(state.is_focused());
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_begin_send_marks_sending() {
        let mut state = with_text("hello");
        let ticket = state.begin_send().unwrap();
        assert_eq!(ticket.text, "hello");
        assert!(state.is_sending());
        assert_eq!(
            state.send_affordance(),
            SendAffordance {
                enabled: false,
                glyph: SendGlyph::Sending
            }
        );
        // text stays until the send completes
        assert_eq!(state.text(), "hello");
    }

    #[test]
    fn test_second_send_is_rejected_while_in_flight() {
        let mut state = with_text("hello");
        let first = state.begin_send().unwrap();
        assert_eq!(state.begin_send().unwrap_err(), SubmitRejected::AlreadySending);
        assert_eq!(state.in_flight_id(), Some(first.id));
    }

    #[test]
    fn test_complete_send_clears_state() {
        let mut state = with_text("hello");
        state.focus();
        let ticket = state.begin_send().unwrap();

        assert!(state.complete_send(ticket.id));
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_sending());
        assert!(!state.is_focused());
        assert_eq!(
            state.send_affordance(),
            SendAffordance {
                enabled: false,
                glyph: SendGlyph::Idle
            }
        );
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = with_text("one");
        let first = state.begin_send().unwrap();
        state.complete_send(first.id);

        state.update_text("two");
        state.focus();
        let second = state.begin_send().unwrap();
        assert_ne!(first.id, second.id);

        assert!(!state.complete_send(first.id));
        assert!(state.is_sending());
        assert_eq!(state.text(), "two");
        assert!(state.is_focused());
    }

    #[test]
    fn test_cancel_in_flight_cancels_token() {
        let mut state = with_text("hello");
        let ticket = state.begin_send().unwrap();
        state.cancel_in_flight();
        assert!(ticket.token.is_cancelled());
        assert!(!state.is_sending());
        // text is kept; nothing was sent
        assert_eq!(state.text(), "hello");
    }

    #[test]
    fn test_editing_with_multibyte_chars() {
        let mut state = ComposerState::new();
        state.insert_str("hé🙂");
        assert_eq!(state.cursor(), "hé🙂".len());
        state.move_cursor_left();
        state.insert_char('x');
        assert_eq!(state.text(), "héx🙂");
        assert!(state.delete_char());
        assert_eq!(state.text(), "héx");
        assert!(!state.delete_char());
        assert!(state.backspace());
        assert_eq!(state.text(), "hé");
        state.move_cursor_home();
        assert!(!state.backspace());
        state.move_cursor_right();
        assert_eq!(state.cursor(), 1);
        state.move_cursor_end();
        assert_eq!(state.cursor(), "hé".len());
        state.move_cursor_right();
        assert_eq!(state.cursor(), "hé".len());
    }

    #[test]
    fn test_insert_str_drops_control_chars() {
        let mut state = ComposerState::new();
        state.insert_str("a\nb\tc");
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_insert_str_at_cursor_in_middle() {
        let mut state = with_text("ac");
        state.move_cursor_left();
        state.insert_str("bé");
        assert_eq!(state.text(), "abéc");
        state.insert_char('!');
        assert_eq!(state.text(), "abé!c");
    }

    #[test]
    fn test_large_paste_keeps_cursor_at_end() {
        let chunk = "héllo wörld 🙂\n";
        let pasted = chunk.repeat(20_000);
        let mut state = ComposerState::new();
        state.insert_str(&pasted);

        let expected = "héllo wörld 🙂".repeat(20_000);
        assert_eq!(state.text(), expected);
        assert_eq!(state.cursor(), expected.len());

        state.insert_char('x');
        assert!(state.text().ends_with("🙂x"));
        assert!(state.backspace());
        assert!(state.backspace());
        assert!(state.text().ends_with(' '));
    }

    #[test]
    fn test_cursor_display_offset_counts_wide_chars() {
        let mut state = with_text("a🙂b");
        state.move_cursor_left();
        assert_eq!(state.cursor_display_offset(), 3);
    }
}
