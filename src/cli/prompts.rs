//! Centralized warning and status messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {count} PASSWORD(S) COPIED TO CLIPBOARD ***");
    }
}

pub fn clipboard_fallback(err: &str) {
    warn(&format!("Clipboard error: {err}. Printing to terminal instead."));
}

pub fn settings_saved(length: usize, options: &[String]) {
    if !quiet::enabled() {
        eprintln!("Saved: length {length}, classes {}", options.join(", "));
    }
}
