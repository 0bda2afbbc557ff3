//! UI rendering for the shell screen
//!
//! Draws, back to front:
//! - Header bar with the menu button and title
//! - Scrollable list of item cards
//! - Composer bar (attach, text field, send)
//! - Dimming overlay and sliding sidebar, while shown
//!
//! Rendering also fills [`App::hit_areas`]; areas registered later sit on
//! top, so the sidebar and overlay shadow everything beneath them.

mod composer;
mod content;
mod header;
pub mod interaction;
mod layout;
mod sidebar;
mod theme;

pub use composer::{visible_slice, ATTACH_GLYPH, PLACEHOLDER, SENDING_FRAMES, SEND_GLYPH};
pub use content::card_line;
pub use header::{HEADER_TITLE, MENU_GLYPH};
pub use layout::{sidebar_span, ShellLayout, COMPOSER_HEIGHT, CONTENT_PADDING, HEADER_HEIGHT};
pub use sidebar::{apply_overlay, entry_row, shade, SIDEBAR_TITLE};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use std::time::Instant;

use ratatui::Frame;

use crate::app::App;
use crate::input::Command;
use composer::render_composer;
use content::render_content;
use header::render_header;
use sidebar::render_sidebar;

/// Render the screen as of now.
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at(frame, app, Instant::now());
}

/// Render the screen with animations sampled at `now`.
pub fn render_at(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    app.hit_areas.clear();

    // Anything not claimed by a control is "outside the text field".
    app.hit_areas.register(area, Command::DismissKeyboard);

    let layout = ShellLayout::new(area);
    render_header(frame, layout.header, app);
    render_content(frame, layout.content, app);
    render_composer(frame, layout.composer, app);
    render_sidebar(frame, area, app, now);

    app.needs_redraw = false;
}
