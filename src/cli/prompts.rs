//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{GREEN, RED, RESET, YELLOW};

/// Yellow, to stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, to stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation line (`success`, `copied`) from the active language.
pub fn done(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{GREEN}\u{2714} {msg}{RESET}");
    }
}

/// `msg` is the localized "settings saved" line.
pub fn settings_saved(msg: &str, path: &str) {
    if !quiet::enabled() {
        eprintln!("{msg} \u{2192} {path}");
    }
}

/// Ask whether to print instead when the clipboard fails. Returns true to
/// fall back to the terminal. Non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprintln!("{YELLOW}Clipboard unavailable: {reason}{RESET}");
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" || input == "s" || input == "si" {
        eprintln!();
        return true;
    }

    eprintln!("Aborted.");
    false
}
