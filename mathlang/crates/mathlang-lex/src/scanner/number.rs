//! Number literal scanning.

use crate::chars::is_digit;
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Scanner;

impl Scanner {
    /// Reads a number literal.
    ///
    /// Consumes the longest run of ASCII digits and nothing else. A decimal
    /// point, exponent or sign that follows is left for the next token, so
    /// `3.14` scans as `3` followed by the bare token `.14`.
    ///
    /// # Returns
    ///
    /// `Token::Number` with the value of the digit run
    pub(super) fn read_number(&mut self) -> LexResult<Token> {
        self.buffer.clear();
        self.cursor.eat_while(&mut self.buffer, is_digit);

        match self.buffer.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(LexError::InvalidToken {
                text: self.buffer.clone(),
                location: self.token_start,
            }),
        }
    }
}
