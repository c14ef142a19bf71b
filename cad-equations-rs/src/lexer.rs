use logos::{Logos, Span};
use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug, PartialEq, Clone, Default)]
pub enum LexingError {
    ParseFloatError(ParseFloatError),
    ParseIntError(ParseIntError),
    #[default]
    InvalidToken,
}

impl From<ParseIntError> for LexingError {
    fn from(err: ParseIntError) -> Self {
        LexingError::ParseIntError(err)
    }
}

impl From<ParseFloatError> for LexingError {
    fn from(err: ParseFloatError) -> Self {
        LexingError::ParseFloatError(err)
    }
}

/// Tokens of an equation manager entry such as `"D1" = 5mm`.
///
/// Numerals are kept as raw lexemes so the caller decides how a failed
/// conversion is reported.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexingError)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    Error(LexingError),
    #[token("\"")]
    Quote,
    #[token("=")]
    Equals,
    #[regex(r"[\+-]?([0-9]+(\.[0-9]*)?|\.[0-9]*)([eE][\+-]?[0-9]+)?", |lex| lex.slice())]
    Numeral(&'src str),
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice())]
    Word(&'src str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Quote => write!(f, "Quote"),
            Token::Equals => write!(f, "Equals"),
            Token::Numeral(text) => write!(f, "Numeral({})", text),
            Token::Word(text) => write!(f, "Word({})", text),
            Token::Error(err) => write!(f, "Error({:?})", err),
        }
    }
}

pub fn lex(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(token) => (token, span),
            Err(err) => (Token::Error(err), span),
        })
}

fn callback_integer(lex: &mut logos::Lexer<LiteralToken>) -> Result<i64, LexingError> {
    lex.slice().parse().map_err(LexingError::from)
}

fn callback_float(lex: &mut logos::Lexer<LiteralToken>) -> Result<f64, LexingError> {
    lex.slice().parse().map_err(LexingError::from)
}

/// Tokens of the strict literal grammar: unsigned integers, decimals with
/// mandatory fraction digits, and exponentials built on such decimals.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexingError)]
pub enum LiteralToken {
    Error(LexingError),
    #[regex(r"[0-9]+", callback_integer)]
    Integer(i64),
    #[regex(r"[0-9]+\.[0-9]+([eE][0-9]+)?", callback_float)]
    Float(f64),
}

impl Display for LiteralToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralToken::Integer(value) => write!(f, "Integer({})", value),
            LiteralToken::Float(value) => write!(f, "Float({})", value),
            LiteralToken::Error(err) => write!(f, "Error({:?})", err),
        }
    }
}

pub fn lex_literal(input: &str) -> impl Iterator<Item = (LiteralToken, Span)> {
    LiteralToken::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(token) => (token, span),
            Err(err) => (LiteralToken::Error(err), span),
        })
}
