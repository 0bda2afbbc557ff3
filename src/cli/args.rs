//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Mount the shell (default)
    RunTui,
}

/// Parse command-line arguments, skipping the program name.
///
/// The first recognised flag wins; anything unrecognised is ignored.
///
/// ```
/// use nooph::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["nooph".to_string(), "-h".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Help);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}
