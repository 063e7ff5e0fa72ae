//! Error handling module for the mlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use mathlang_lex::LexError;
use thiserror::Error;

/// Main error type for the mlt CLI application.
#[derive(Error, Debug)]
pub enum MltError {
    /// Error when the configuration cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source fails to scan.
    #[error("{path}: {source}")]
    Lex {
        /// Label of the source that failed (file path, `<stdin>` or `<expr>`).
        path: String,
        /// The underlying scanner error.
        #[source]
        source: LexError,
    },

    /// Error when one or more files fail `mlt check`.
    #[error("{failed} of {total} file(s) failed to scan")]
    CheckFailed {
        /// Number of files with errors.
        failed: usize,
        /// Number of files checked.
        total: usize,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MltError.
pub type Result<T> = std::result::Result<T, MltError>;
