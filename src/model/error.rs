//! Error types for the hexsift application.
//!
//! The core (scanner, layout engine, renderer, state machine) is made of
//! total functions and has no error path of its own: structural-parse and
//! pretty-print failures are recovered locally, degenerate geometry is
//! clamped, out-of-range navigation is ignored. What remains is the shell:
//! configuration, logging setup, and terminal I/O, composed here with
//! `thiserror` so everything propagates via `?` and `From`.

use thiserror::Error;

/// Top-level application error wrapping all shell failure modes.
///
/// Returned from `main`-adjacent plumbing. All domain-specific error types
/// convert into `AppError` via `From`, so startup code can use `?`
/// uniformly.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed. Fatal at startup;
    /// a missing file is not an error (defaults apply).
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or I/O failure in the crossterm/ratatui layer, or reading
    /// the input file. Fatal: without a working terminal the TUI cannot
    /// run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Failure inside the running TUI session.
    #[error("Session error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
