use std::ops::Range;

/// Errors raised while reading or rewriting equation manager entries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EquationError {
    #[error("Unexpected {found} at {span:?}")]
    UnexpectedToken { found: String, span: Range<usize> },

    #[error("Missing '=' separator in {0:?}")]
    MissingSeparator(String),

    #[error("Malformed numeral {0:?}")]
    MalformedNumeral(String),

    #[error("Not supported unit {0:?}")]
    UnsupportedUnit(String),
}
