//! Panic hook that restores the terminal before the panic is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating the [`TerminalManager`].
///
/// The previous hook (color-eyre's, once installed) still runs afterwards,
/// so the report lands on a normal screen.
///
/// [`TerminalManager`]: super::TerminalManager
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
