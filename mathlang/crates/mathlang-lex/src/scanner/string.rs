//! String literal scanning.

use crate::chars::QUOTE;
use crate::error::{LexError, LexResult};
use crate::token::Token;
use crate::Scanner;

impl Scanner {
    /// Reads a string literal.
    ///
    /// The payload is every character between the opening and the closing
    /// quote. There are no escape sequences: a backslash is kept verbatim and
    /// newlines are ordinary content.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedString`] if the cursor is not on a quote or the
    /// source ends before the closing quote.
    pub(super) fn read_string(&mut self) -> LexResult<Token> {
        self.buffer.clear();

        let start = self.cursor.location();
        let unterminated = || LexError::UnterminatedString { location: start };

        if self.cursor.read().map_err(|_| unterminated())? != QUOTE {
            return Err(unterminated());
        }

        loop {
            let c = self.cursor.peek().map_err(|_| unterminated())?;
            if c == QUOTE {
                break;
            }
            self.buffer.push(self.cursor.read()?);
        }

        // Closing quote.
        self.cursor.read()?;

        Ok(Token::StringLiteral(self.buffer.clone()))
    }
}
