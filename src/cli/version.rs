//! `--version` and `--help` output.

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "nooph {VERSION}
A terminal chat-screen shell: header, item list, composer and sliding sidebar.

USAGE:
    nooph [FLAGS]

FLAGS:
    -h, --help       Print this help and exit
    -V, --version    Print the version and exit

ENVIRONMENT:
    NOOPH_TRANSITION_MS     Sidebar transition duration (default 300)
    NOOPH_SEND_DELAY_MS     Simulated send delay (default 500)
    NOOPH_SIDEBAR_COLUMNS   Sidebar width in columns (default 28)
    NOOPH_LOG               Enable file logging with this filter (e.g. debug)
    NOOPH_LOG_FILE          Log file path

KEYS:
    Ctrl+B / m   Toggle sidebar        i / Enter   Focus the text field
    Esc          Dismiss sidebar or keyboard
    Enter        Send (while typing)   Ctrl+O      Attach
    q / Ctrl+C   Quit"
    )
}

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("nooph {}", VERSION);
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", usage());
    std::process::exit(0)
}
