//! Bare token scanning: names and symbols.
//!
//! A bare token runs until the next whitespace character or the end of the
//! source. Letters, digits and punctuation inside the run do not split it.

use crate::chars::{is_name_start, is_symbol_start};
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Scanner;

impl Scanner {
    /// Reads a bare token and classifies it by its first character.
    ///
    /// - A run starting with a letter becomes a `Token::Name` holding the
    ///   whole run, whatever else it contains.
    /// - A run starting with a symbol character becomes a `Token::Symbol`
    ///   holding only that first character. The rest of the run is consumed
    ///   and dropped, so `+-*` yields a single `+`.
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidToken`] if the run starts with `.` or a decimal
    /// digit outside ASCII, such as `٣`.
    pub(super) fn read_bare(&mut self) -> LexResult<Token> {
        self.buffer.clear();
        self.cursor.eat_while(&mut self.buffer, |c| !c.is_whitespace());

        let first = self
            .buffer
            .chars()
            .next()
            .ok_or_else(|| LexError::PrematureEndOfInput {
                location: self.cursor.location(),
            })?;

        if is_name_start(first) {
            Ok(Token::Name(self.buffer.clone()))
        } else if is_symbol_start(first) {
            Ok(Token::Symbol(first))
        } else {
            Err(LexError::InvalidToken {
                text: self.buffer.clone(),
                location: self.token_start,
            })
        }
    }
}
