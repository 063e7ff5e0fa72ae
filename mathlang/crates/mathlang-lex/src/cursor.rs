//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which owns a shared handle to the
//! source text and maintains the read position. All end-of-input detection
//! lives in [`Cursor::peek`]; [`Cursor::read`] is built on top of it, so no
//! other code path can read past the end of the buffer.

use std::fmt;
use std::sync::Arc;

use crate::error::{LexError, LexResult};

/// A point in the source text.
///
/// `offset` is a byte offset into the UTF-8 source. `line` and `column` are
/// 1-based, with columns counted in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Location {
    /// The location of the first character of any source.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor for traversing source text character by character.
///
/// The position only ever moves forward. Once it reaches the end of the
/// source every [`peek`](Cursor::peek) fails with
/// [`LexError::PrematureEndOfInput`].
///
/// # Example
///
/// ```
/// use mathlang_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.peek().unwrap(), 'a');
/// assert_eq!(cursor.read().unwrap(), 'a');
/// assert_eq!(cursor.read().unwrap(), 'b');
/// assert!(cursor.peek().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The source text being traversed.
    source: Arc<str>,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl Cursor {
    /// Creates a new cursor at the start of `source`.
    ///
    /// Accepts anything convertible into `Arc<str>`, so an existing
    /// `Arc<str>` can be shared between several cursors without copying.
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::PrematureEndOfInput`] if no characters remain.
    ///
    /// # Example
    ///
    /// ```
    /// use mathlang_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek().unwrap(), 'x');
    /// assert_eq!(cursor.peek().unwrap(), 'x');
    /// ```
    #[inline]
    pub fn peek(&self) -> LexResult<char> {
        self.source[self.position..]
            .chars()
            .next()
            .ok_or_else(|| LexError::PrematureEndOfInput {
                location: self.location(),
            })
    }

    /// Consumes and returns the next character.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::PrematureEndOfInput`] if no characters remain.
    #[inline]
    pub fn read(&mut self) -> LexResult<char> {
        let c = self.peek()?;
        self.bump(c);
        Ok(c)
    }

    /// Moves past `c`, which must be the character at the current position.
    #[inline]
    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes characters while `predicate` holds, appending each one to
    /// `buffer`. Stops at the first rejected character or the end of input.
    pub fn eat_while(&mut self, buffer: &mut String, predicate: impl Fn(char) -> bool) {
        while let Ok(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.bump(c);
            buffer.push(c);
        }
    }

    /// Skips whitespace characters.
    ///
    /// Uses Unicode whitespace as defined by [`char::is_whitespace`].
    ///
    /// # Example
    ///
    /// ```
    /// use mathlang_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.peek().unwrap(), 'l');
    /// ```
    pub fn skip_whitespace(&mut self) {
        while let Ok(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    /// Returns the number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current position as a [`Location`].
    pub fn location(&self) -> Location {
        Location {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }
}
