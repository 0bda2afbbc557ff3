//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects. Mouse
//! taps resolve to the same commands through the hit area registry.

use crate::state::MenuEntry;

/// Every action the shell can perform in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application
    Quit,

    // =========================================================================
    // Shell
    // =========================================================================
    /// Show or hide the sidebar (menu button)
    ToggleSidebar,
    /// Hide the sidebar (overlay tap, Esc)
    DismissSidebar,
    /// Blur the text field (background tap, Esc)
    DismissKeyboard,
    /// Focus the text field
    FocusInput,

    // =========================================================================
    // Sidebar
    // =========================================================================
    /// Move the menu highlight up
    MenuUp,
    /// Move the menu highlight down
    MenuDown,
    /// Select the highlighted entry
    SelectHighlighted,
    /// Select a specific entry (tap)
    SelectEntry(MenuEntry),

    // =========================================================================
    // Composer
    // =========================================================================
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    DeleteChar,
    /// Cursor left
    CursorLeft,
    /// Cursor right
    CursorRight,
    /// Cursor to start of text
    CursorHome,
    /// Cursor to end of text
    CursorEnd,
    /// Tap the send affordance
    Submit,
    /// Tap the attach affordance
    Attach,

    // =========================================================================
    // Content
    // =========================================================================
    /// Scroll the list up by rows
    ScrollUp(u16),
    /// Scroll the list down by rows
    ScrollDown(u16),
    /// Scroll the list up by one viewport
    ScrollPageUp,
    /// Scroll the list down by one viewport
    ScrollPageDown,
    /// Jump to the first item
    ScrollToTop,
    /// Jump to the last item
    ScrollToBottom,

    /// Consumed without effect (taps on the sidebar panel body)
    Noop,
}
