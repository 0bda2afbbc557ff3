//! Terminal ownership with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw/alternate-screen mode when
//! created and restores it when dropped, on normal exit and on error paths
//! alike. The panic hook from [`setup_panic_hook`] covers panics.
//!
//! ```no_run
//! use nooph::terminal::TerminalManager;
//!
//! fn main() -> nooph::error::ShellResult<()> {
//!     let mut term = TerminalManager::new()?;
//!     term.draw(|_frame| {})?;
//!     Ok(())
//! } // terminal restored here
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};

use crate::error::{ShellError, ShellResult};

/// Restores the terminal on drop. Created by [`TerminalManager`].
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now; later calls (including the one from `Drop`) do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// The ratatui terminal plus its cleanup guard.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture and
    /// bracketed paste, and clear it.
    pub fn new() -> ShellResult<Self> {
        enable_raw_mode().map_err(ShellError::TerminalInit)?;

        // From here on the guard undoes partial setup if a later step fails.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(ShellError::TerminalInit)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(ShellError::TerminalInit)?;
        terminal.clear().map_err(ShellError::TerminalInit)?;

        tracing::debug!("terminal entered TUI mode");
        Ok(Self { terminal, guard })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> ShellResult<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).map_err(ShellError::Render)?;
        Ok(())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) {
        self.guard.cleanup();
        tracing::debug!("terminal restored");
    }
}
