//! Centralized warning and error messages for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Quiet mode flag - suppresses warnings
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Only colour stderr when a person is looking at it.
fn colored() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

fn paint(color: &str, msg: &str) -> String {
    if colored() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", paint(YELLOW, msg));
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg));
}

pub fn mlock_failed() {
    warn("Warning: mlock failed - password buffers may be swapped to disk.");
    warn("Fix: ulimit -l unlimited, or setcap cap_ipc_lock=ep on binary");
}

pub fn invalid_length() {
    error("Invalid password length");
}

pub fn invalid_count() {
    error("Invalid passwords count");
}

pub fn settings_not_loaded(err: &std::io::Error) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_not_saved(err: &std::io::Error) {
    warn(&format!("Failed to save settings: {err}"));
}
