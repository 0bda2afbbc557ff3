//! Color theme constants for the nooph UI
//!
//! A light-on-dark palette with a purple accent on the composer.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Header and composer bar background
pub const COLOR_BAR_BG: Color = Color::Rgb(28, 28, 32);

/// Border color between bars and content
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text (placeholders, disabled affordances)
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Content cards
// ============================================================================

/// Card fill - faint blue
pub const COLOR_CARD_BG: Color = Color::Rgb(22, 30, 46);

/// Card border
pub const COLOR_CARD_BORDER: Color = Color::Rgb(52, 72, 110);

/// Card label
pub const COLOR_CARD_TEXT: Color = Color::Rgb(220, 226, 240);

// ============================================================================
// Composer
// ============================================================================

/// Accent for attach and send
pub const COLOR_ACCENT: Color = Color::Rgb(150, 90, 220);

/// Text field background - faint purple
pub const COLOR_INPUT_BG: Color = Color::Rgb(36, 30, 46);

/// Text field foreground
pub const COLOR_INPUT_TEXT: Color = Color::White;

// ============================================================================
// Sidebar
// ============================================================================

/// Sidebar panel background
pub const COLOR_SIDEBAR_BG: Color = Color::Rgb(40, 40, 46);

/// Highlighted sidebar entry
pub const COLOR_SIDEBAR_HIGHLIGHT: Color = Color::Rgb(64, 64, 74);
