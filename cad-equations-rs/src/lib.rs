//! Unit-aware parsing of CAD equation manager entries such as `"D1" = 5mm`.

mod equation;
mod error;
mod lexer;
mod literal;
mod numeral;
mod store;
mod units;

pub use crate::equation::{Equation, format, parse};
pub use crate::error::EquationError;
pub use crate::lexer::{LexingError, LiteralToken};
pub use crate::literal::{Literal, parse_literal};
pub use crate::numeral::{numeral_prefix, parse_numeral};
pub use crate::store::{EquationSlots, EquationStore};
pub use crate::units::{Category, Unit, UnitDescriptor, resolve};
