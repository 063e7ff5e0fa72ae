//! Token definitions for the math language.
//!
//! The scanner produces exactly four kinds of token. Each variant carries a
//! single payload and owns it, so a token stays valid after the scanner that
//! produced it is dropped.

use std::fmt;

/// A single lexical unit produced by the [`Scanner`](crate::Scanner).
///
/// # Example
///
/// ```
/// use mathlang_lex::Token;
///
/// let token = Token::Name("x".to_string());
/// assert_eq!(token.to_string(), "x");
/// assert_eq!(Token::StringLiteral("hi".into()).to_string(), "\"hi\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Text between double quotes, with the quotes removed.
    StringLiteral(String),

    /// An alphabetic-first bare word, kept verbatim.
    Name(String),

    /// The first character of a punctuation run.
    Symbol(char),

    /// The value of a run of decimal digits.
    Number(f64),
}

/// The variant of a [`Token`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::StringLiteral`]
    String,
    /// [`Token::Name`]
    Name,
    /// [`Token::Symbol`]
    Symbol,
    /// [`Token::Number`]
    Number,
}

impl Token {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::StringLiteral(_) => TokenKind::String,
            Token::Name(_) => TokenKind::Name,
            Token::Symbol(_) => TokenKind::Symbol,
            Token::Number(_) => TokenKind::Number,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::StringLiteral(text) => write!(f, "\"{}\"", text),
            Token::Name(name) => f.write_str(name),
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Number(value) => write!(f, "{}", value),
        }
    }
}

impl TokenKind {
    /// Returns a lowercase name for the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Name => "name",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Token::StringLiteral(String::new()).kind(), TokenKind::String);
        assert_eq!(Token::Name("a".into()).kind(), TokenKind::Name);
        assert_eq!(Token::Symbol('+').kind(), TokenKind::Symbol);
        assert_eq!(Token::Number(1.0).kind(), TokenKind::Number);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::StringLiteral("a b".into()).to_string(), "\"a b\"");
        assert_eq!(Token::Name("note".into()).to_string(), "note");
        assert_eq!(Token::Symbol(';').to_string(), ";");
        assert_eq!(Token::Number(42.0).to_string(), "42");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::String.to_string(), "string");
        assert_eq!(TokenKind::Number.as_str(), "number");
    }
}
