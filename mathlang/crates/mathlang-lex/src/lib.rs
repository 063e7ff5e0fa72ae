//! mathlang-lex - Scanner for the math language
//!
//! This crate turns the source text of the math language into a stream of
//! tokens for a parser. The scanner is handed the whole source up front and
//! produces one token per call until the input is exhausted.
//!
//! # Example Usage
//!
//! ```
//! use mathlang_lex::{Scanner, Token};
//!
//! let mut scanner = Scanner::new("print \"x is\" x");
//!
//! // Pull tokens one at a time
//! while let Some(token) = scanner.next_token().unwrap() {
//!     println!("{:?}", token);
//! }
//!
//! // Or collect them
//! let tokens = mathlang_lex::tokenize("x = 12").unwrap();
//! assert_eq!(tokens[2], Token::Number(12.0));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Scanner implementation
//! - [`cursor`] - Character cursor and source locations
//! - [`chars`] - Character classification
//! - [`error`] - Lexical errors
//!
//! # Lexical Rules
//!
//! Tokens are separated by whitespace. After skipping whitespace the scanner
//! looks at the next character:
//!
//! - **String**: `"` starts a string literal that runs to the next `"`.
//!   There are no escape sequences.
//! - **Number**: an ASCII digit starts a number made of the longest digit
//!   run. `12abc` is the number `12` followed by the name `abc`.
//! - **Name**: any other run of non-whitespace characters that starts with a
//!   letter is a name, including everything up to the next whitespace.
//! - **Symbol**: a run that starts with any other character that is not a
//!   decimal digit is a symbol carrying only that first character. `+=` is
//!   the symbol `+`, and `½` is a symbol too.
//!
//! A run that starts with `.` or a non-ASCII decimal digit such as `٣` is
//! rejected.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Location};
pub use error::{LexError, LexResult};
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
