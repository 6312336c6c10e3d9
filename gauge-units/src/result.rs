//! Conversion result - a value with its unit and display string

use std::fmt;
use serde::Serialize;
use gauge_core::UnitDefinition;
use crate::format_value;

/// A converted value packaged for display.
///
/// `formatted_value` is computed once, at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub value: f64,
    pub unit: UnitDefinition,
    pub formatted_value: String,
}

impl ConversionResult {
    pub fn new(value: f64, unit: UnitDefinition) -> Self {
        let formatted_value = format_value(value);
        ConversionResult { value, unit, formatted_value }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted_value, self.unit.symbol)
    }
}
