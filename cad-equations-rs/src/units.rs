//! The fixed registry of units accepted in equations.
//!
//! Every unit belongs to a [`Category`] and converts to that category's SI base unit
//! (metre or radian) through `uom` quantities.

use std::fmt::Display;
use std::str::FromStr;

use uom::si::angle::{degree, radian};
use uom::si::f64::{Angle, Length};
use uom::si::length::{centimeter, foot, inch, meter, microinch, micrometer, mil, millimeter, nanometer};

use crate::error::EquationError;

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Angle,
}

impl Category {
    /// Symbol of the SI base unit values of this category are stored in.
    pub fn base_symbol(self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Angle => "rad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Metre,
    Centimetre,
    Millimetre,
    Micrometre,
    Nanometre,
    Inch,
    Foot,
    Mil,
    Microinch,
    Degree,
    Radian,
}

/// Registry entry: how a display unit maps onto its SI base unit.
#[derive(Debug)]
pub struct UnitDescriptor {
    pub unit: Unit,
    pub symbol: &'static str,
    pub category: Category,
    pub to_si: fn(f64) -> f64,
    pub from_si: fn(f64) -> f64,
}

macro_rules! length_unit {
    ($unit:ident, $symbol:literal, $uom:ty) => {
        UnitDescriptor {
            unit: Unit::$unit,
            symbol: $symbol,
            category: Category::Length,
            to_si: |value| Length::new::<$uom>(value).get::<meter>(),
            from_si: |value| Length::new::<meter>(value).get::<$uom>(),
        }
    };
}

macro_rules! angle_unit {
    ($unit:ident, $symbol:literal, $uom:ty) => {
        UnitDescriptor {
            unit: Unit::$unit,
            symbol: $symbol,
            category: Category::Angle,
            to_si: |value| Angle::new::<$uom>(value).get::<radian>(),
            from_si: |value| Angle::new::<radian>(value).get::<$uom>(),
        }
    };
}

// Ordered like the `Unit` variants.
static UNIT_TABLE: [UnitDescriptor; 11] = [
    length_unit!(Metre, "m", meter),
    length_unit!(Centimetre, "cm", centimeter),
    length_unit!(Millimetre, "mm", millimeter),
    length_unit!(Micrometre, "um", micrometer),
    length_unit!(Nanometre, "nm", nanometer),
    length_unit!(Inch, "in", inch),
    length_unit!(Foot, "ft", foot),
    length_unit!(Mil, "mil", mil),
    length_unit!(Microinch, "uin", microinch),
    angle_unit!(Degree, "deg", degree),
    angle_unit!(Radian, "rad", radian),
];

/// Looks up a unit symbol in the registry.
pub fn resolve(symbol: &str) -> Result<&'static UnitDescriptor, EquationError> {
    UNIT_TABLE
        .iter()
        .find(|descriptor| descriptor.symbol == symbol)
        .ok_or_else(|| EquationError::UnsupportedUnit(symbol.to_string()))
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Metre,
        Unit::Centimetre,
        Unit::Millimetre,
        Unit::Micrometre,
        Unit::Nanometre,
        Unit::Inch,
        Unit::Foot,
        Unit::Mil,
        Unit::Microinch,
        Unit::Degree,
        Unit::Radian,
    ];

    pub fn descriptor(self) -> &'static UnitDescriptor {
        &UNIT_TABLE[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        self.descriptor().symbol
    }

    pub fn category(self) -> Category {
        self.descriptor().category
    }

    /// Converts a magnitude expressed in this unit to the SI base unit.
    pub fn to_si(self, value: f64) -> f64 {
        (self.descriptor().to_si)(value)
    }

    /// Converts an SI base value to a magnitude expressed in this unit.
    pub fn from_si(self, value: f64) -> f64 {
        (self.descriptor().from_si)(value)
    }
}

impl FromStr for Unit {
    type Err = EquationError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        resolve(symbol).map(|descriptor| descriptor.unit)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
