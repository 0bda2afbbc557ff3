//! Default keybindings for the shell.
//!
//! Bindings are grouped by [`InputContext`]. Global bindings are checked
//! first, then the bindings for the active context. While editing, any
//! unbound printable key inserts itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputContext {
    /// Sidebar is open; the overlay blocks everything behind it.
    Sidebar,
    /// Text field is focused.
    Editing,
    /// Nothing focused; keys scroll the list.
    Browsing,
}

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(key: &KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Keybinding configuration for the shell.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Per input context
    pub context: HashMap<InputContext, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            context: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_sidebar_bindings();
        config.setup_editing_bindings();
        config.setup_browsing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        // Ctrl+B stands in for the header menu button
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('b')), Command::ToggleSidebar);
    }

    fn setup_sidebar_bindings(&mut self) {
        let mut sidebar = HashMap::new();
        sidebar.insert(KeyCombo::plain(KeyCode::Esc), Command::DismissSidebar);
        sidebar.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleSidebar);
        sidebar.insert(KeyCombo::plain(KeyCode::Up), Command::MenuUp);
        sidebar.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MenuUp);
        sidebar.insert(KeyCombo::plain(KeyCode::Down), Command::MenuDown);
        sidebar.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MenuDown);
        sidebar.insert(KeyCombo::plain(KeyCode::Enter), Command::SelectHighlighted);
        self.context.insert(InputContext::Sidebar, sidebar);
    }

    fn setup_editing_bindings(&mut self) {
        let mut editing = HashMap::new();
        editing.insert(KeyCombo::plain(KeyCode::Esc), Command::DismissKeyboard);
        editing.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        editing.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        editing.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteChar);
        editing.insert(KeyCombo::plain(KeyCode::Left), Command::CursorLeft);
        editing.insert(KeyCombo::plain(KeyCode::Right), Command::CursorRight);
        editing.insert(KeyCombo::plain(KeyCode::Home), Command::CursorHome);
        editing.insert(KeyCombo::plain(KeyCode::End), Command::CursorEnd);
        editing.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::CursorHome);
        editing.insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::CursorEnd);
        editing.insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::Attach);
        self.context.insert(InputContext::Editing, editing);
    }

    fn setup_browsing_bindings(&mut self) {
        let mut browsing = HashMap::new();
        browsing.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        browsing.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleSidebar);
        browsing.insert(KeyCombo::plain(KeyCode::Char('i')), Command::FocusInput);
        browsing.insert(KeyCombo::plain(KeyCode::Enter), Command::FocusInput);
        browsing.insert(KeyCombo::plain(KeyCode::Char('a')), Command::Attach);
        browsing.insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::Attach);
        browsing.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        browsing.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp(1));
        browsing.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        browsing.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown(1));
        browsing.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        browsing.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        browsing.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollToTop);
        browsing.insert(KeyCombo::plain(KeyCode::Char('g')), Command::ScrollToTop);
        browsing.insert(KeyCombo::plain(KeyCode::End), Command::ScrollToBottom);
        browsing.insert(KeyCombo::new(KeyCode::Char('G'), KeyModifiers::SHIFT), Command::ScrollToBottom);
        self.context.insert(InputContext::Browsing, browsing);
    }

    /// Resolve a key event in a context.
    pub fn resolve(&self, key: &KeyEvent, context: InputContext) -> Option<Command> {
        let combo = KeyCombo::from(key);

        if let Some(cmd) = self.global.get(&combo) {
            return Some(*cmd);
        }

        if let Some(cmd) = self.context.get(&context).and_then(|m| m.get(&combo)) {
            return Some(*cmd);
        }

        if context == InputContext::Editing {
            if let KeyCode::Char(c) = key.code {
                let typing = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
                if typing {
                    return Some(Command::InsertChar(c));
                }
            }
        }

        None
    }
}
