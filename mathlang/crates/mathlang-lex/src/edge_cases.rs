//! Edge case tests for mathlang-lex

use crate::{tokenize, LexError, Scanner, Token};

fn lex_all(source: &str) -> Vec<Token> {
    tokenize(source).unwrap()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_single_char_name() {
    assert_eq!(lex_all("x"), vec![Token::Name("x".into())]);
}

#[test]
fn test_edge_single_char_symbol() {
    assert_eq!(lex_all("="), vec![Token::Symbol('=')]);
}

#[test]
fn test_edge_long_name() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("let {} = 1", name));
    assert_eq!(t[1], Token::Name(name));
}

#[test]
fn test_edge_zero() {
    assert_eq!(lex_all("0"), vec![Token::Number(0.0)]);
}

#[test]
fn test_edge_number_then_string() {
    assert_eq!(
        lex_all("1\"a\""),
        vec![Token::Number(1.0), Token::StringLiteral("a".into())]
    );
}

#[test]
fn test_edge_symbol_run_swallows_quote() {
    // The quote is inside a bare run, so no string literal is opened.
    assert_eq!(lex_all("(\"a b"), vec![Token::Symbol('('), Token::Name("b".into())]);
}

#[test]
fn test_edge_quote_inside_name() {
    assert_eq!(lex_all("a\"b"), vec![Token::Name("a\"b".into())]);
}

#[test]
fn test_edge_adjacent_strings() {
    assert_eq!(
        lex_all("\"a\"\"b\""),
        vec![
            Token::StringLiteral("a".into()),
            Token::StringLiteral("b".into())
        ]
    );
}

#[test]
fn test_edge_string_with_only_whitespace() {
    assert_eq!(lex_all("\" \t \""), vec![Token::StringLiteral(" \t ".into())]);
}

#[test]
fn test_edge_crlf_line_endings() {
    assert_eq!(
        lex_all("a\r\nb\r\n"),
        vec![Token::Name("a".into()), Token::Name("b".into())]
    );
}

#[test]
fn test_edge_unicode_whitespace_separates() {
    assert_eq!(
        lex_all("a\u{3000}b"),
        vec![Token::Name("a".into()), Token::Name("b".into())]
    );
}

#[test]
fn test_edge_multibyte_symbol() {
    assert_eq!(lex_all("→ x"), vec![Token::Symbol('→'), Token::Name("x".into())]);
}

#[test]
fn test_edge_vulgar_fraction_is_symbol() {
    assert_eq!(
        lex_all("½ ² x"),
        vec![Token::Symbol('½'), Token::Symbol('²'), Token::Name("x".into())]
    );
}

#[test]
fn test_edge_arabic_indic_digit_is_invalid() {
    let err = tokenize("x ٣").unwrap_err();
    assert_eq!(
        err,
        LexError::InvalidToken {
            text: "٣".into(),
            location: err.location(),
        }
    );
    assert_eq!(err.location().column, 3);
}

#[test]
fn test_edge_lone_dot() {
    assert!(matches!(tokenize("."), Err(LexError::InvalidToken { .. })));
}

#[test]
fn test_edge_unterminated_after_newline() {
    let err = tokenize("a\n\"open\n").unwrap_err();
    let at = err.location();
    assert!(matches!(err, LexError::UnterminatedString { .. }));
    assert_eq!((at.line, at.column), (2, 1));
}

#[test]
fn test_edge_digit_run_then_dot() {
    let mut scanner = Scanner::new("1.");
    assert_eq!(scanner.next_token(), Ok(Some(Token::Number(1.0))));
    assert!(scanner.next_token().is_err());
}
