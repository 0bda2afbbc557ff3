//! Domain objects shared by the shell's state components.
//!
//! - [`Transition`] - Time-based interpolation with easing
//! - [`ScrollState`] - Row offset into scrollable content

pub mod scroll;
pub mod transition;

pub use scroll::ScrollState;
pub use transition::{ease_in_out_cubic, linear, Easing, Transition};
