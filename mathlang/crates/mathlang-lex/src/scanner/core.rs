//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the per-token dispatch and the
//! iterator adapter.

use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::chars::{is_digit, QUOTE};
use crate::cursor::{Cursor, Location};
use crate::error::LexResult;
use crate::token::Token;

/// Scanner for the math language.
///
/// The scanner is pull-based: every call to [`next_token`](Scanner::next_token)
/// skips whitespace and reads one token. Once the source is exhausted every
/// further call returns `Ok(None)`.
///
/// # Example
///
/// ```
/// use mathlang_lex::{Scanner, Token};
///
/// let mut scanner = Scanner::new("let x = 5;");
/// assert_eq!(scanner.next_token(), Ok(Some(Token::Name("let".into()))));
/// assert_eq!(scanner.next_token(), Ok(Some(Token::Name("x".into()))));
/// assert_eq!(scanner.next_token(), Ok(Some(Token::Symbol('='))));
/// assert_eq!(scanner.next_token(), Ok(Some(Token::Number(5.0))));
/// assert_eq!(scanner.next_token(), Ok(Some(Token::Symbol(';'))));
/// assert_eq!(scanner.next_token(), Ok(None));
/// ```
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor,

    /// Scratch buffer for the text of the token being read.
    pub(super) buffer: String,

    /// Where the current token starts.
    pub(super) token_start: Location,

    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl Scanner {
    /// Creates a new scanner over `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - The complete source text. Passing an `Arc<str>` lets
    ///   several scanners share one buffer.
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            cursor: Cursor::new(source),
            buffer: String::new(),
            token_start: Location::START,
            failed: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the next character: a quote
    /// starts a string literal, an ASCII digit starts a number, and anything
    /// else starts a bare token.
    ///
    /// # Returns
    ///
    /// `Ok(Some(token))`, or `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Any [`LexError`](crate::LexError). The scanner should not be used
    /// after an error; its position is unspecified.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.cursor.skip_whitespace();
        self.token_start = self.cursor.location();

        let Ok(first) = self.cursor.peek() else {
            return Ok(None);
        };

        let result = match first {
            QUOTE => self.read_string(),
            c if is_digit(c) => self.read_number(),
            _ => self.read_bare(),
        };

        match &result {
            Ok(token) => trace!(
                kind = %token.kind(),
                line = self.token_start.line,
                column = self.token_start.column,
                "scanned token"
            ),
            Err(err) => debug!(error = %err, "scan failed"),
        }

        result.map(Some)
    }

    /// Returns the next token together with the location it starts at.
    pub fn next_located(&mut self) -> LexResult<Option<(Location, Token)>> {
        Ok(self
            .next_token()?
            .map(|token| (self.token_start, token)))
    }

    /// Returns the location where the most recently scanned token starts.
    pub fn token_start(&self) -> Location {
        self.token_start
    }

    /// Returns the current location of the cursor.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &Arc<str> {
        self.cursor.source()
    }
}

impl Iterator for Scanner {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Scanner {}

/// Scans the whole of `source`.
///
/// # Errors
///
/// Returns the first [`LexError`](crate::LexError) encountered.
///
/// # Example
///
/// ```
/// use mathlang_lex::{tokenize, Token};
///
/// let tokens = tokenize("print \"hi\"").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Name("print".into()), Token::StringLiteral("hi".into())]
/// );
/// ```
pub fn tokenize(source: impl Into<Arc<str>>) -> LexResult<Vec<Token>> {
    Scanner::new(source).collect()
}
