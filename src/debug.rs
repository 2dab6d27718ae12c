//! Diagnostics on stderr, off by default.
//!
//! Turned on by [`enable_debug`] (the binary's `--debug` flag) or by setting `JSTREE_DEBUG`
//! to anything other than an empty string, `0`, `false` or `off`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Global flag to control debug output
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Ensures environment variable check happens only once
static INIT: Once = Once::new();

fn init_from_env() {
    INIT.call_once(|| {
        if let Ok(value) = std::env::var("JSTREE_DEBUG") {
            if switched_on(&value) {
                DEBUG_ENABLED.store(true, Ordering::Relaxed);
            }
        }
    });
}

fn switched_on(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off"
    )
}

/// Enable debug output
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

/// Check if debug output is enabled
pub fn is_debug_enabled() -> bool {
    init_from_env();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print a `[jstree]`-prefixed message to stderr only if debug mode is enabled
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[jstree] {}", format_args!($($arg)*));
        }
    };
}

/// Like [`debug_println!`], tagged with the index of the concurrent assembly task it concerns
#[macro_export]
macro_rules! debug_task {
    ($index:expr, $($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[jstree] task {}: {}", $index, format_args!($($arg)*));
        }
    };
}
