//! Character classification for the scanner.
//!
//! These predicates decide which reader a character dispatches to and how a
//! bare token is classified. Letters are Unicode alphabetic characters; only
//! ASCII digits start a numeric literal.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// The delimiter that opens and closes a string literal.
pub const QUOTE: char = '"';

/// Returns true if `c` starts a numeric literal.
///
/// # Example
///
/// ```
/// use mathlang_lex::chars::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('٣'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` is a decimal digit in any script (category Nd).
///
/// # Example
///
/// ```
/// use mathlang_lex::chars::is_decimal_digit;
///
/// assert!(is_decimal_digit('7'));
/// assert!(is_decimal_digit('٣'));
/// assert!(!is_decimal_digit('½'));
/// ```
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

/// Returns true if a bare token starting with `c` is a name.
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Returns true if a bare token starting with `c` is a symbol.
///
/// Letters, decimal digits of any script and `.` never start a symbol.
/// Other numeric characters such as `½` or `²` do.
///
/// # Example
///
/// ```
/// use mathlang_lex::chars::is_symbol_start;
///
/// assert!(is_symbol_start('+'));
/// assert!(is_symbol_start('"'));
/// assert!(is_symbol_start('½'));
/// assert!(!is_symbol_start('.'));
/// assert!(!is_symbol_start('x'));
/// assert!(!is_symbol_start('٣'));
/// ```
#[inline]
pub fn is_symbol_start(c: char) -> bool {
    !c.is_alphabetic() && !is_decimal_digit(c) && c != '.'
}
