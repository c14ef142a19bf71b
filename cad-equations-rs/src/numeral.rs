//! Lenient decimal numerals as written in the equation manager.
//!
//! `sign? digits* ('.' digits*)? ([eE] sign? digits+)?`: the integer digits may be
//! empty (`.5`), as may the fraction digits (`5.`). Whitespace is never consumed here.

use crate::error::EquationError;
use crate::lexer::{Token, lex};

/// Converts a numeral lexeme to `f64`, rejecting anything that is not finite.
pub(crate) fn convert(lexeme: &str) -> Result<f64, EquationError> {
    match lexeme.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EquationError::MalformedNumeral(lexeme.to_string())),
    }
}

/// Parses `text` as a single numeral. The whole input must be consumed.
pub fn parse_numeral(text: &str) -> Result<f64, EquationError> {
    let prefix = numeral_prefix(text);
    if prefix.is_empty() || prefix.len() != text.len() {
        return Err(EquationError::MalformedNumeral(text.to_string()));
    }
    convert(prefix)
}

/// Returns the longest numeral lexeme at the very start of `text`, or `""`.
pub fn numeral_prefix(text: &str) -> &str {
    match lex(text).next() {
        Some((Token::Numeral(lexeme), span)) if span.start == 0 => lexeme,
        _ => "",
    }
}
