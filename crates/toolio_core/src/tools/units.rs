//! Unit conversion tables.
//!
//! Linear categories convert through a base unit (meter, kilogram, liter).
//! Temperature converts through Celsius.

use std::error::Error;
use std::fmt::{Display, Formatter};

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];
const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("pound", 0.453592),
    ("ounce", 0.0283495),
    ("ton", 1000.0),
];
const VOLUME_UNITS: &[(&str, f64)] = &[
    ("liter", 1.0),
    ("milliliter", 0.001),
    ("gallon", 3.78541),
    ("quart", 0.946353),
    ("pint", 0.473176),
    ("cup", 0.24),
];
const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Volume,
    ];

    pub fn parse(value: &str) -> Result<Self, ConversionError> {
        match value.trim() {
            "length" => Ok(Self::Length),
            "weight" => Ok(Self::Weight),
            "temperature" => Ok(Self::Temperature),
            "volume" => Ok(Self::Volume),
            other => Err(ConversionError::UnknownCategory(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Volume => "volume",
        }
    }

    /// Unit names in table order.
    pub fn units(self) -> Vec<&'static str> {
        match self.factors() {
            Some(table) => table.iter().map(|(name, _)| *name).collect(),
            None => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Initial `(from, to)` selection for the category.
    pub fn default_units(self) -> (&'static str, &'static str) {
        if self == Self::Temperature {
            return ("celsius", "fahrenheit");
        }
        let units = self.units();
        let from = units[0];
        (from, units.get(1).copied().unwrap_or(from))
    }

    fn factors(self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Self::Length => Some(LENGTH_UNITS),
            Self::Weight => Some(WEIGHT_UNITS),
            Self::Volume => Some(VOLUME_UNITS),
            Self::Temperature => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Input is NaN or infinite.
    InvalidValue(f64),
    UnknownCategory(String),
    UnknownUnit {
        category: UnitCategory,
        unit: String,
    },
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue(value) => write!(f, "value must be a finite number, got {value}"),
            Self::UnknownCategory(value) => write!(f, "unknown unit category `{value}`"),
            Self::UnknownUnit { category, unit } => {
                write!(f, "unknown {} unit `{unit}`", category.as_str())
            }
        }
    }
}

impl Error for ConversionError {}

/// Converts `value` from one unit of `category` to another.
pub fn convert(
    category: UnitCategory,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    match category.factors() {
        Some(table) => {
            let from_factor = linear_factor(category, table, from)?;
            let to_factor = linear_factor(category, table, to)?;
            Ok(value * from_factor / to_factor)
        }
        None => {
            let celsius = to_celsius(value, from)?;
            from_celsius(celsius, to)
        }
    }
}

/// `"{value} {from} = {result} {to}"` with six decimals on the result.
pub fn format_conversion(value: f64, from: &str, result: f64, to: &str) -> String {
    format!("{value} {from} = {result:.6} {to}")
}

/// Parses user input the way a number field does: trimmed, finite only.
pub fn parse_value(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn linear_factor(
    category: UnitCategory,
    table: &[(&str, f64)],
    unit: &str,
) -> Result<f64, ConversionError> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| unknown_unit(category, unit))
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, ConversionError> {
    match unit {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - KELVIN_OFFSET),
        other => Err(unknown_unit(UnitCategory::Temperature, other)),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64, ConversionError> {
    match unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + KELVIN_OFFSET),
        other => Err(unknown_unit(UnitCategory::Temperature, other)),
    }
}

fn unknown_unit(category: UnitCategory, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category,
        unit: unit.to_string(),
    }
}
