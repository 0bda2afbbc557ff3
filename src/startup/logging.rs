//! File logging setup.
//!
//! The TUI owns stdout, so log output goes to a file and only when
//! `NOOPH_LOG` is set. Its value is an `EnvFilter` directive such as
//! `debug` or `nooph=trace`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{ShellError, ShellResult};

const ENV_LOG: &str = "NOOPH_LOG";
const ENV_LOG_FILE: &str = "NOOPH_LOG_FILE";

/// Default log location: `<data_local_dir>/nooph/nooph.log`.
///
/// Falls back to the working directory when no data dir is known.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("nooph"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nooph.log")
}

/// Open (creating parents) the log file in append mode.
pub fn open_log_file(path: &Path) -> ShellResult<File> {
    let to_err = |source| ShellError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_err)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_err)
}

/// Install the global subscriber if `NOOPH_LOG` is set.
///
/// Returns the log path in use, or `None` when logging is off.
pub fn init_logging() -> ShellResult<Option<PathBuf>> {
    let Ok(directive) = std::env::var(ENV_LOG) else {
        return Ok(None);
    };

    let path = std::env::var(ENV_LOG_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_log_path());
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ShellError::LogInit(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}
