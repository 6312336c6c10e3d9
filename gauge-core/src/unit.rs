//! Unit representation with conversion parameters

use std::fmt;
use serde::{Serialize, Deserialize};

/// How a unit relates to the implicit base unit of its category.
///
/// Replaces the nullable `offset` / `isInverse` fields of the catalog file:
/// a temperature unit always carries both its factor and its offset, and an
/// inverse unit can never be a temperature unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// value_base = value * factor
    Linear { factor: f64 },
    /// Magnitude runs opposite to the category's natural linear scale
    /// (e.g. L/100km in a km/L category)
    InverseLinear { factor: f64 },
    /// Affine unit, Celsius is the intermediate:
    /// celsius = (value + offset) * factor
    Temperature { factor: f64, offset: f64 },
}

impl UnitKind {
    /// Multiplicative factor (or affine scale coefficient for temperature)
    pub fn factor(&self) -> f64 {
        match *self {
            UnitKind::Linear { factor }
            | UnitKind::InverseLinear { factor }
            | UnitKind::Temperature { factor, .. } => factor,
        }
    }

    /// Additive offset, present only for temperature units
    pub fn offset(&self) -> Option<f64> {
        match *self {
            UnitKind::Temperature { offset, .. } => Some(offset),
            _ => None,
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, UnitKind::Temperature { .. })
    }

    pub fn is_inverse(&self) -> bool {
        matches!(self, UnitKind::InverseLinear { .. })
    }
}

/// A single unit of measure, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnitRecord", into = "UnitRecord")]
pub struct UnitDefinition {
    /// The unit name (e.g., "Kilometers")
    pub name: String,
    /// The unit symbol (e.g., "km"); unique within a category
    pub symbol: String,
    /// Conversion parameters
    pub kind: UnitKind,
    /// Marks the reference unit of a category (informational)
    pub is_base: bool,
    /// Display-only description
    pub description: Option<String>,
}

impl UnitDefinition {
    fn with_kind(name: &str, symbol: &str, kind: UnitKind) -> Self {
        UnitDefinition {
            name: name.to_string(),
            symbol: symbol.to_string(),
            kind,
            is_base: false,
            description: None,
        }
    }

    /// Create a unit with proportional conversion
    pub fn linear(name: &str, symbol: &str, factor: f64) -> Self {
        Self::with_kind(name, symbol, UnitKind::Linear { factor })
    }

    /// Create a unit inversely related to its category's linear scale
    pub fn inverse(name: &str, symbol: &str, factor: f64) -> Self {
        Self::with_kind(name, symbol, UnitKind::InverseLinear { factor })
    }

    /// Create a temperature unit: celsius = (value + offset) * factor
    pub fn temperature(name: &str, symbol: &str, factor: f64, offset: f64) -> Self {
        Self::with_kind(name, symbol, UnitKind::Temperature { factor, offset })
    }

    /// Builder: mark as the reference unit of its category
    pub fn as_base(mut self) -> Self {
        self.is_base = true;
        self
    }

    /// Builder: attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn factor(&self) -> f64 {
        self.kind.factor()
    }

    pub fn offset(&self) -> Option<f64> {
        self.kind.offset()
    }

    pub fn is_temperature(&self) -> bool {
        self.kind.is_temperature()
    }

    pub fn is_inverse(&self) -> bool {
        self.kind.is_inverse()
    }

    /// Same unit for batch matching purposes (symbol equality)
    pub fn same_symbol(&self, other: &UnitDefinition) -> bool {
        self.symbol == other.symbol
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Catalog-file shape of a unit (camelCase keys, optional discriminators)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    pub unit_name: String,
    pub unit_symbol: String,
    pub conversion_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inverse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A catalog record that cannot become a [`UnitDefinition`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid unit '{symbol}': {reason}")]
pub struct InvalidUnit {
    pub symbol: String,
    pub reason: String,
}

impl TryFrom<UnitRecord> for UnitDefinition {
    type Error = InvalidUnit;

    fn try_from(record: UnitRecord) -> Result<Self, Self::Error> {
        let factor = record.conversion_factor;
        if !factor.is_finite() {
            return Err(InvalidUnit {
                symbol: record.unit_symbol,
                reason: format!("conversion factor {} is not finite", factor),
            });
        }

        let inverse = record.is_inverse.unwrap_or(false);
        let kind = match record.offset {
            Some(_) if inverse => {
                return Err(InvalidUnit {
                    symbol: record.unit_symbol,
                    reason: "a temperature unit cannot be inverse".to_string(),
                });
            }
            Some(offset) => UnitKind::Temperature { factor, offset },
            None if inverse => UnitKind::InverseLinear { factor },
            None => UnitKind::Linear { factor },
        };

        Ok(UnitDefinition {
            name: record.unit_name,
            symbol: record.unit_symbol,
            kind,
            is_base: record.is_base.unwrap_or(false),
            description: record.description,
        })
    }
}

impl From<UnitDefinition> for UnitRecord {
    fn from(unit: UnitDefinition) -> Self {
        UnitRecord {
            unit_name: unit.name,
            unit_symbol: unit.symbol,
            conversion_factor: unit.kind.factor(),
            offset: unit.kind.offset(),
            is_base: unit.is_base.then_some(true),
            is_inverse: unit.kind.is_inverse().then_some(true),
            description: unit.description,
        }
    }
}
