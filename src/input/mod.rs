//! Keyboard input handling.
//!
//! Keys are resolved to [`Command`]s through [`KeybindingConfig`] using the
//! [`InputContext`] derived from the shell state.

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{InputContext, KeyCombo, KeybindingConfig};
