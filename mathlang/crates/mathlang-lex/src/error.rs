//! Lexical error types.
//!
//! Every error aborts the current scan. The scanner does not resynchronize
//! after a failure, so callers are expected to stop at the first error.

use thiserror::Error;

use crate::cursor::Location;

/// Error raised while scanning a source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was opened with `"` but never closed.
    #[error("unterminated string literal starting at {location}")]
    UnterminatedString {
        /// Location of the opening quote.
        location: Location,
    },

    /// A bare token starts with a character that is neither a letter nor a
    /// symbol character.
    #[error("invalid token '{text}' at {location}")]
    InvalidToken {
        /// The whole whitespace-delimited run that was rejected.
        text: String,
        /// Location of the first character of the run.
        location: Location,
    },

    /// A character was required but the source was exhausted.
    #[error("unexpected end of input at {location}")]
    PrematureEndOfInput {
        /// Location of the end of the source.
        location: Location,
    },
}

impl LexError {
    /// Returns the source location the error refers to.
    pub fn location(&self) -> Location {
        match self {
            Self::UnterminatedString { location }
            | Self::InvalidToken { location, .. }
            | Self::PrematureEndOfInput { location } => *location,
        }
    }
}

/// Result type alias for scanning operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
