//! Startup: configuration and logging.
//!
//! Both run before the terminal enters TUI mode so that a bad
//! environment override is reported on a normal screen.

pub mod config;
pub mod logging;

pub use config::{
    ShellConfig, DEFAULT_SEND_DELAY, DEFAULT_SIDEBAR_COLUMNS, DEFAULT_TRANSITION, FRAME_TICK,
    LIST_ITEM_COUNT, OVERLAY_OPACITY, SIDEBAR_HIDDEN_OFFSET_UNITS, SIDEBAR_WIDTH_UNITS,
};
pub use logging::{default_log_path, init_logging, open_log_file};
