//!
//! Terminal diagnostics.
//!
//! Status and warning lines go to `stderr`, so that `stdout` only carries the report.
//!

use colored::Colorize;

/// The process-wide quiet switch.
static QUIET: once_cell::sync::OnceCell<bool> = once_cell::sync::OnceCell::new();

///
/// Sets the quiet mode. Only the first call has an effect.
///
pub fn set_quiet(quiet: bool) {
    let _ = QUIET.set(quiet);
}

///
/// Whether diagnostics are suppressed.
///
pub fn is_quiet() -> bool {
    QUIET.get().copied().unwrap_or_default()
}

///
/// Prints a cargo-like status line, e.g. `     Loading benchmarks from ...`.
///
pub fn status(verb: &str, message: impl std::fmt::Display) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {message}", format!("{verb:>12}").bright_green().bold());
}

///
/// Prints a warning line.
///
pub fn warning(message: impl std::fmt::Display) {
    if is_quiet() {
        return;
    }
    eprintln!("{}: {message}", "Warning".bright_yellow().bold());
}
