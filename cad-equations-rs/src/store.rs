//! Named variables held in a host's equation manager.
//!
//! The host owns an indexed collection of raw text slots such as `"D1" = 5mm`. The
//! store reads names and raw values out of those slots and rewrites the numeral of
//! one slot in place.

use std::collections::HashMap;

use crate::equation::{self, Equation};
use crate::error::EquationError;
use crate::numeral::numeral_prefix;

/// The host's indexed collection of equation text.
///
/// Indices run over `0..count()` and must stay stable for the duration of one store
/// operation.
pub trait EquationSlots {
    fn count(&self) -> usize;
    fn text(&self, index: usize) -> String;
    fn set_text(&mut self, index: usize, text: String);
}

impl EquationSlots for Vec<String> {
    fn count(&self) -> usize {
        self.len()
    }

    fn text(&self, index: usize) -> String {
        self[index].clone()
    }

    fn set_text(&mut self, index: usize, text: String) {
        self[index] = text;
    }
}

fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c == '"' || c.is_whitespace())
}

/// Splits a slot at its first `=` into the bare name and the raw value text.
fn split_slot(text: &str) -> Option<(&str, &str)> {
    text.split_once('=')
        .map(|(name, value)| (trim_name(name), value.trim()))
}

pub struct EquationStore<'h, H: EquationSlots + ?Sized> {
    host: &'h mut H,
}

impl<'h, H: EquationSlots + ?Sized> EquationStore<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        EquationStore { host }
    }

    /// Maps every variable name to its raw value text, e.g. `"D1" = 5mm` gives
    /// `D1 -> 5mm`. Values are not unit converted. Later slots win over earlier
    /// slots with the same name, and any slot without `=` fails the whole read.
    pub fn get_all(&self) -> Result<HashMap<String, String>, EquationError> {
        let mut globals = HashMap::new();
        for index in 0..self.host.count() {
            let text = self.host.text(index);
            let Some((name, value)) = split_slot(&text) else {
                tracing::warn!("Equation slot {} has no separator: {:?}", index, text);
                return Err(EquationError::MissingSeparator(text));
            };
            if globals
                .insert(name.to_string(), value.to_string())
                .is_some()
            {
                tracing::debug!("Equation {} redefined by slot {}", name, index);
            }
        }
        Ok(globals)
    }

    pub fn get_one(&self, name: &str) -> Result<Option<String>, EquationError> {
        Ok(self.get_all()?.remove(name))
    }

    /// Rewrites the numeral of the first slot named `name` with `new_value`, keeping
    /// the unit suffix.
    ///
    /// Returns `Ok(false)` without writing when no slot carries that name, and fails
    /// without writing when `new_value` is not finite.
    ///
    /// The old value text is replaced as a substring of the whole slot text, not at
    /// its position: every other occurrence of the same characters in the slot changes
    /// too, so `"A5mm" = 5mm` set to 7 becomes `"A7mm" = 7mm`.
    pub fn set_one(&mut self, name: &str, new_value: f64) -> Result<bool, EquationError> {
        if !new_value.is_finite() {
            return Err(EquationError::MalformedNumeral(new_value.to_string()));
        }
        for index in 0..self.host.count() {
            let text = self.host.text(index);
            let Some((slot_name, value)) = split_slot(&text) else {
                continue;
            };
            if slot_name != name {
                continue;
            }
            let old = numeral_prefix(value);
            if old.is_empty() {
                return Err(EquationError::MalformedNumeral(value.to_string()));
            }
            let replacement = format!("{}{}", new_value, &value[old.len()..]);
            let rewritten = text.replace(value, &replacement);
            tracing::debug!("Equation slot {} rewritten: {:?} -> {:?}", index, text, rewritten);
            self.host.set_text(index, rewritten);
            return Ok(true);
        }
        Ok(false)
    }

    /// Parses every slot into a unit-converted [`Equation`], in slot order.
    pub fn equations(&self) -> Result<Vec<Equation>, EquationError> {
        (0..self.host.count())
            .map(|index| {
                let text = self.host.text(index);
                equation::parse(&text).inspect_err(|err| {
                    tracing::warn!("Equation slot {} could not be parsed: {}", index, err)
                })
            })
            .collect()
    }

    /// The last equation named `name`, parsed and converted to SI.
    pub fn equation(&self, name: &str) -> Result<Option<Equation>, EquationError> {
        Ok(self
            .equations()?
            .into_iter()
            .rev()
            .find(|equation| equation.name() == name))
    }
}
