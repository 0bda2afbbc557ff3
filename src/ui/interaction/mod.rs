//! Tap interaction for the shell.
//!
//! Render functions register [`HitArea`]s; mouse clicks are resolved to
//! commands with [`HitAreaRegistry::hit_test`].

mod hit_area;

pub use hit_area::{HitArea, HitAreaRegistry};
