//! Strict numeric literals: `digits`, `digits.digits` or `digits.digits(e|E)digits`.
//!
//! Unlike [`crate::numeral`], this grammar has no sign, requires digits on both sides
//! of the decimal point and only allows an exponent after a fractional literal. It is
//! not used when reading equations.

use crate::lexer::{LiteralToken, lex_literal};
use chumsky::error::Rich;
use chumsky::input::{Input, Stream, ValueInput};
use chumsky::prelude::end;
use chumsky::span::SimpleSpan;
use chumsky::{Parser, extra, select};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal {
    Integer(i64),
    Float(f64),
}

impl Literal {
    pub fn value(self) -> f64 {
        match self {
            Literal::Integer(value) => value as f64,
            Literal::Float(value) => value,
        }
    }
}

fn parser<'a, I>() -> impl Parser<'a, I, Literal, extra::Err<Rich<'a, LiteralToken>>>
where
    I: ValueInput<'a, Token = LiteralToken, Span = SimpleSpan>,
{
    let literal = select! {
        LiteralToken::Integer(value) => Literal::Integer(value),
        LiteralToken::Float(value) => Literal::Float(value),
    };
    literal.then_ignore(end())
}

pub fn parse_literal(input: &str) -> Result<Literal, Vec<Rich<LiteralToken>>> {
    let token_iter = lex_literal(input).map(|(token, span)| (token, span.into()));
    let token_stream =
        Stream::from_iter(token_iter).map((0..input.len()).into(), |(t, s): (_, _)| (t, s));
    parser().parse(token_stream).into_result()
}
