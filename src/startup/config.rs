//! Shell configuration.
//!
//! Interaction timings and sidebar geometry live here as named values so
//! the state logic can be exercised without any rendering.

use std::time::Duration;

use crate::error::{ShellError, ShellResult};

/// Duration of the sidebar slide and overlay fade.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Simulated latency between tapping send and the field clearing.
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(500);

/// Sidebar panel width in layout units.
pub const SIDEBAR_WIDTH_UNITS: f32 = 250.0;

/// Sidebar offset in layout units while hidden (fully off-screen).
pub const SIDEBAR_HIDDEN_OFFSET_UNITS: f32 = -300.0;

/// Overlay opacity while the sidebar is shown.
pub const OVERLAY_OPACITY: f32 = 0.4;

/// Number of placeholder rows in the content list.
pub const LIST_ITEM_COUNT: usize = 30;

/// Terminal columns the full sidebar width maps to.
pub const DEFAULT_SIDEBAR_COLUMNS: u16 = 28;

/// Frame tick for animations (~60fps).
pub const FRAME_TICK: Duration = Duration::from_millis(16);

const ENV_TRANSITION_MS: &str = "NOOPH_TRANSITION_MS";
const ENV_SEND_DELAY_MS: &str = "NOOPH_SEND_DELAY_MS";
const ENV_SIDEBAR_COLUMNS: &str = "NOOPH_SIDEBAR_COLUMNS";

/// Configuration for the shell.
///
/// Use the builder methods to customize behavior.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nooph::startup::ShellConfig;
///
/// let config = ShellConfig::default()
///     .with_send_delay(Duration::from_millis(100))
///     .with_sidebar_columns(32);
/// assert_eq!(config.sidebar_columns, 32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Sidebar/overlay transition duration
    pub transition: Duration,
    /// Delay before a send completes
    pub send_delay: Duration,
    /// Sidebar width in layout units
    pub sidebar_width_units: f32,
    /// Sidebar offset while hidden, in layout units (negative)
    pub hidden_offset_units: f32,
    /// Overlay opacity while the sidebar is visible (0.0..=1.0)
    pub overlay_opacity: f32,
    /// Number of rows in the content list
    pub item_count: usize,
    /// Terminal columns occupied by the sidebar at full width
    pub sidebar_columns: u16,
    /// Animation frame tick
    pub frame_tick: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            send_delay: DEFAULT_SEND_DELAY,
            sidebar_width_units: SIDEBAR_WIDTH_UNITS,
            hidden_offset_units: SIDEBAR_HIDDEN_OFFSET_UNITS,
            overlay_opacity: OVERLAY_OPACITY,
            item_count: LIST_ITEM_COUNT,
            sidebar_columns: DEFAULT_SIDEBAR_COLUMNS,
            frame_tick: FRAME_TICK,
        }
    }
}

impl ShellConfig {
    /// Create a new ShellConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sidebar transition duration.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Set the simulated send delay.
    pub fn with_send_delay(mut self, delay: Duration) -> Self {
        self.send_delay = delay;
        self
    }

    /// Set how many terminal columns the sidebar spans.
    pub fn with_sidebar_columns(mut self, columns: u16) -> Self {
        self.sidebar_columns = columns.max(1);
        self
    }

    /// Set the overlay opacity, clamped to `0.0..=1.0`.
    pub fn with_overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Build a config from `NOOPH_*` environment overrides.
    ///
    /// Unset variables keep their defaults. A set but unparsable variable
    /// is an error rather than being silently ignored.
    pub fn from_env() -> ShellResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ShellResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TRANSITION_MS) {
            config = config.with_transition(Duration::from_millis(parse_u64(ENV_TRANSITION_MS, &raw)?));
        }
        if let Some(raw) = lookup(ENV_SEND_DELAY_MS) {
            config = config.with_send_delay(Duration::from_millis(parse_u64(ENV_SEND_DELAY_MS, &raw)?));
        }
        if let Some(raw) = lookup(ENV_SIDEBAR_COLUMNS) {
            let columns = parse_u64(ENV_SIDEBAR_COLUMNS, &raw)?;
            if columns == 0 || columns > u16::MAX as u64 {
                return Err(invalid(ENV_SIDEBAR_COLUMNS, &raw, "expected 1..=65535 columns"));
            }
            config = config.with_sidebar_columns(columns as u16);
        }

        Ok(config)
    }

    /// Convert a horizontal offset in layout units to terminal columns.
    pub fn units_to_columns(&self, units: f32) -> i32 {
        (units * self.sidebar_columns as f32 / self.sidebar_width_units).round() as i32
    }
}

fn parse_u64(key: &str, raw: &str) -> ShellResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| invalid(key, raw, "expected a whole number"))
}

fn invalid(key: &str, raw: &str, reason: &str) -> ShellError {
    ShellError::InvalidConfig {
        key: key.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}
