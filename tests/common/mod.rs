//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use nooph::app::App;
use nooph::startup::ShellConfig;
use nooph::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Terminal size used by render tests.
pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 24;

/// An app with default configuration.
pub fn test_app() -> App {
    App::new(ShellConfig::default())
}

/// Render one frame at `now` and return the buffer.
pub fn render_frame(app: &mut App, now: Instant) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::render_at(f, app, now)).unwrap();
    terminal.backend().buffer().clone()
}

/// The text of one buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

/// All rows of the buffer joined with newlines.
pub fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A moment after any transition started at `start` has settled.
pub fn settled_after(app: &App, start: Instant) -> Instant {
    start + app.config.transition + Duration::from_millis(1)
}
