use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

use chumsky::error::{Rich, RichReason};
use chumsky::input::{Input, Stream, ValueInput};
use chumsky::prelude::{end, just};
use chumsky::span::SimpleSpan;
use chumsky::{Parser, extra, select};

use crate::error::EquationError;
use crate::lexer::{Token, lex};
use crate::numeral;
use crate::units::{self, Category, Unit};

/// A named parametric variable, normalized to the SI base unit of its category.
///
/// `unit` only records how the value is displayed; `value_si` is always in metres or
/// radians. Both the SI value and its display magnitude are finite, so every
/// equation formats to text that parses back.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    name: String,
    value_si: f64,
    unit: Unit,
}

impl Equation {
    pub fn new(name: impl Into<String>, value_si: f64, unit: Unit) -> Result<Self, EquationError> {
        if !value_si.is_finite() {
            return Err(EquationError::MalformedNumeral(value_si.to_string()));
        }
        let magnitude = unit.from_si(value_si);
        if !magnitude.is_finite() {
            return Err(EquationError::MalformedNumeral(format!(
                "{}{}",
                magnitude,
                unit.symbol()
            )));
        }
        Ok(Equation {
            name: name.into(),
            value_si,
            unit,
        })
    }

    /// Builds an equation from an SI value and a unit symbol that must be registered.
    pub fn with_symbol(
        name: impl Into<String>,
        value_si: f64,
        symbol: &str,
    ) -> Result<Self, EquationError> {
        let unit = units::resolve(symbol)?.unit;
        Equation::new(name, value_si, unit)
    }

    /// Builds an equation from a magnitude expressed in `symbol`.
    pub fn from_display(
        name: impl Into<String>,
        magnitude: f64,
        symbol: &str,
    ) -> Result<Self, EquationError> {
        let descriptor = units::resolve(symbol)?;
        Equation::new(name, (descriptor.to_si)(magnitude), descriptor.unit)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_si(&self) -> f64 {
        self.value_si
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn category(&self) -> Category {
        self.unit.category()
    }

    /// The value expressed in the display unit.
    pub fn magnitude(&self) -> f64 {
        self.unit.from_si(self.value_si)
    }

    /// `<magnitude><unit>`, e.g. `5mm`.
    pub fn value_with_unit(&self) -> String {
        format!("{}{}", self.magnitude(), self.unit.symbol())
    }
}

/// Renders `"<name>"=<magnitude><unit>` without any whitespace.
///
/// The magnitude is recomputed from `value_si`, so the output reparses to the same
/// SI value but need not match the text the equation was parsed from.
pub fn format(equation: &Equation) -> String {
    format!("\"{}\"={}", equation.name, equation.value_with_unit())
}

impl Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format(self))
    }
}

impl FromStr for Equation {
    type Err = EquationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

const SEPARATOR: &str = "expected '='";
const NUMERAL: &str = "expected numeral";

fn parser<'src, I>()
-> impl Parser<'src, I, (&'src str, f64, &'src str), extra::Err<Rich<'src, Token<'src>>>>
where
    I: ValueInput<'src, Token = Token<'src>, Span = SimpleSpan>,
{
    let quote = just(Token::Quote).map_with(|_, e| e.span());
    let word = select! {
        Token::Word(word) => word,
    };
    // No blanks between the quotes and the name.
    let name = quote
        .clone()
        .then(word.clone().map_with(|word, e| (word, e.span())))
        .then(quote)
        .try_map(|((open, (name, span)), close): ((SimpleSpan, (&'src str, SimpleSpan)), SimpleSpan), whole| {
            if open.end == span.start && span.end == close.start {
                Ok(name)
            } else {
                Err(Rich::custom(whole, "blank inside quoted name"))
            }
        });
    let separator = just(Token::Equals)
        .ignored()
        .map_err(|err: Rich<'src, Token<'src>>| Rich::custom(*err.span(), SEPARATOR));
    let magnitude = select! {
        Token::Numeral(lexeme) => lexeme,
    }
    .try_map(|lexeme, span| numeral::convert(lexeme).map_err(|_| Rich::custom(span, NUMERAL)))
    .map_err(|err: Rich<'src, Token<'src>>| Rich::custom(*err.span(), NUMERAL));
    name.then_ignore(separator)
        .then(magnitude)
        .then(word)
        .then_ignore(end())
        .map(|((name, magnitude), symbol)| (name, magnitude, symbol))
}

fn unexpected(text: &str, span: Range<usize>) -> EquationError {
    let found = if span.start >= text.len() {
        "end of input".to_string()
    } else {
        format!("{:?}", &text[span.clone()])
    };
    EquationError::UnexpectedToken { found, span }
}

fn classify(text: &str, err: &Rich<'_, Token<'_>>) -> EquationError {
    let span = err.span().start..err.span().end;
    match err.reason() {
        RichReason::Custom(message) if message.as_str() == SEPARATOR => {
            EquationError::MissingSeparator(text.to_string())
        }
        RichReason::Custom(message) if message.as_str() == NUMERAL => {
            EquationError::MalformedNumeral(text[span].to_string())
        }
        _ => unexpected(text, span),
    }
}

/// Parses `"<name>" = <numeral> <unit>` and converts the value to SI.
pub fn parse(text: &str) -> Result<Equation, EquationError> {
    let token_iter = lex(text).map(|(token, span)| (token, span.into()));
    let eoi = text.len()..text.len();
    let token_stream =
        Stream::from_iter(token_iter).map(eoi.clone().into(), |(t, s): (_, _)| (t, s));
    let (name, magnitude, symbol) = parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| match errs.first() {
            Some(err) => classify(text, err),
            None => unexpected(text, eoi),
        })?;
    let equation = Equation::from_display(name, magnitude, symbol)?;
    tracing::trace!("Parsed equation {} = {} {}", name, magnitude, symbol);
    Ok(equation)
}
