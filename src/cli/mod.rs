//! Command-line flags handled before the TUI starts.
//!
//! ```ignore
//! use nooph::cli::{parse_args, run_cli_command};
//!
//! run_cli_command(parse_args(std::env::args()));
//! // only RunTui returns; continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_help_command, handle_version_command, usage, VERSION};

/// Run a CLI command if it is not the TUI.
///
/// `Version` and `Help` print and exit the process; `RunTui` returns.
pub fn run_cli_command(command: CliCommand) {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui => {}
    }
}
