//! Interaction state owned by the shell.
//!
//! - [`SidebarState`] - Sidebar visibility and reveal transition
//! - [`ComposerState`] - Text field, focus and the in-flight send
//! - [`ContentList`] - Static list items and scroll position

pub mod composer;
pub mod list;
pub mod sidebar;

pub use composer::{ComposerState, SendAffordance, SendGlyph, SendTicket};
pub use list::{ContentList, ListItem, VisibleItem, ITEM_HEIGHT, ITEM_SPACING};
pub use sidebar::{overlay_opacity, sidebar_offset, MenuEntry, SidebarState};
