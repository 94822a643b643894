//! User-facing messages
//!
//! Progress lines go to standard output; warnings and errors go to standard
//! error with a `WARNING:` / `ERROR:` prefix. Diagnostics are logged through
//! `tracing` instead.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Output preferences taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress progress lines
    pub quiet: bool,
    /// Verbosity level for diagnostics (0 = warnings only)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Make this configuration the one used by the message functions
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
    }

    /// Tracing level matching the verbosity
    pub fn log_level(self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Format a warning line
pub fn warning_line(message: impl Display) -> String {
    format!("WARNING: {message}")
}

/// Format an error line
pub fn error_line(message: impl Display) -> String {
    format!("ERROR: {message}")
}

/// Print a progress line unless quiet
pub fn info(message: impl Display) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{message}");
    }
}

/// Print a warning
pub fn warn(message: impl Display) {
    eprintln!("{}", warning_line(message));
}

/// Print an error; errors are shown even when quiet
pub fn error(message: impl Display) {
    eprintln!("{}", error_line(message));
}

/// Print a fatal error
pub fn display_error(err: &anyhow::Error) {
    error(err);
}
