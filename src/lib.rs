//! Nooph - a single-screen chat shell for the terminal
//!
//! Header, scrollable item list, composer bar and a slide-in sidebar over a
//! dimming overlay. This library exposes the modules for the binary and the
//! integration tests.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
