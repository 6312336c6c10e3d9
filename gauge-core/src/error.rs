//! Conversion and lookup errors, plus a structured error for clients
//!
//! Errors never crash the system. The engine returns them as values and the
//! server renders them with a machine-readable code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const ZERO_FACTOR: &str = "ZERO_FACTOR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const CATEGORY_MISMATCH: &str = "CATEGORY_MISMATCH";
    pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
}

/// Failure of a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Source and destination disagree on temperature-ness
    #[error("cannot convert {from} to {to}: temperature and non-temperature units are not interchangeable")]
    IncompatibleUnits { from: String, to: String },

    /// Destination unit has a zero conversion factor
    #[error("unit {symbol} has a zero conversion factor")]
    ZeroFactor { symbol: String },
}

/// A symbol or category name that the catalog does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Structured error for client consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl GaugeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unknown_unit(symbol: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", symbol))
            .with_suggestion("Use list_units to see the symbols of a category")
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion("Use list_categories to see available categories")
    }

    pub fn category_mismatch(from: &str, to: &str) -> Self {
        Self::new(codes::CATEGORY_MISMATCH,
            format!("{} and {} belong to different categories", from, to))
            .with_suggestion("Pick both units from the same category")
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{}: missing argument '{}'", tool, arg))
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(codes::ARG_TYPE, format!("{}: argument '{}' must be {}", tool, arg, expected))
    }
}

impl std::fmt::Display for GaugeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for GaugeError {}

impl From<ConversionError> for GaugeError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::IncompatibleUnits { .. } => {
                Self::new(codes::INCOMPATIBLE_UNITS, err.to_string())
                    .with_suggestion("Temperature units convert only to other temperature units")
            }
            ConversionError::ZeroFactor { .. } => {
                Self::new(codes::ZERO_FACTOR, err.to_string())
                    .with_suggestion("Fix the unit's conversionFactor in the catalog")
            }
        }
    }
}

impl From<LookupError> for GaugeError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::UnknownUnit(s) => Self::unknown_unit(&s),
            LookupError::UnknownCategory(s) => Self::unknown_category(&s),
        }
    }
}
