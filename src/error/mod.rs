//! Error types for the nooph shell.
//!
//! User-facing actions never fail: a rejected send is reported as a
//! [`SubmitRejected`] value by the composer. The errors here cover the
//! plumbing around the screen (terminal, rendering, configuration, logging).
//!
//! # Example
//!
//! ```
//! use nooph::error::ShellError;
//!
//! let err = ShellError::InvalidConfig {
//!     key: "NOOPH_SEND_DELAY_MS".to_string(),
//!     value: "soon".to_string(),
//!     reason: "expected a whole number of milliseconds".to_string(),
//! };
//! assert!(!err.is_recoverable());
//! assert!(err.to_string().contains("NOOPH_SEND_DELAY_MS"));
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type ShellResult<T> = Result<T, ShellError>;

/// Fallible operations outside the interaction model.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Raw mode, alternate screen or backend creation failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// Drawing a frame failed.
    #[error("failed to render frame: {0}")]
    Render(#[source] io::Error),

    /// Reading terminal events failed.
    #[error("failed to read terminal event: {0}")]
    Event(#[source] io::Error),

    /// The app message channel was closed while the shell was mounted.
    #[error("app message channel closed")]
    ChannelClosed,

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    /// The log file could not be opened.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The global tracing subscriber was already set.
    #[error("failed to install log subscriber: {0}")]
    LogInit(String),
}

impl ShellError {
    /// Whether the TUI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShellError::LogFile { .. } | ShellError::LogInit(_))
    }

    /// Short message suitable for printing after the terminal is restored.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::TerminalInit(_) => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            ShellError::Render(_) | ShellError::Event(_) => {
                "The terminal stopped responding. Please restart nooph.".to_string()
            }
            ShellError::ChannelClosed => {
                "Internal communication error. Please restart nooph.".to_string()
            }
            ShellError::InvalidConfig { key, .. } => {
                format!("Invalid configuration in {}. Unset it or fix the value.", key)
            }
            ShellError::LogFile { path, .. } => {
                format!("Logging disabled: could not open {}", path.display())
            }
            ShellError::LogInit(_) => "Logging disabled.".to_string(),
        }
    }
}

/// Why a send was not started.
///
/// The composer refuses a send instead of raising an error; the send
/// affordance is rendered disabled whenever one of these would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// The text field is empty.
    #[error("nothing to send")]
    EmptyText,
    /// A send is already in flight.
    #[error("a message is already being sent")]
    AlreadySending,
    /// No async runtime is available to complete the send.
    #[error("no runtime to complete the send")]
    NoRuntime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_errors_are_fatal() {
        let err = ShellError::TerminalInit(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("no tty"));

        let err = ShellError::Render(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_log_errors_are_recoverable() {
        let err = ShellError::LogFile {
            path: PathBuf::from("/nope/nooph.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_recoverable());
        assert!(err.user_message().contains("/nope/nooph.log"));
    }

    #[test]
    fn test_invalid_config_names_the_key() {
        let err = ShellError::InvalidConfig {
            key: "NOOPH_TRANSITION_MS".to_string(),
            value: "-1".to_string(),
            reason: "negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"-1\" for NOOPH_TRANSITION_MS: negative"
        );
        assert!(err.user_message().contains("NOOPH_TRANSITION_MS"));
    }

    #[test]
    fn test_submit_rejected_display() {
        assert_eq!(SubmitRejected::EmptyText.to_string(), "nothing to send");
        assert_eq!(
            SubmitRejected::AlreadySending.to_string(),
            "a message is already being sent"
        );
        assert_eq!(
            SubmitRejected::NoRuntime.to_string(),
            "no runtime to complete the send"
        );
    }
}
