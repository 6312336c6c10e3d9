//! Gauge Core - Fundamental types
//!
//! This crate provides the data model used throughout Gauge:
//! - `UnitDefinition` / `UnitKind`: one unit and how it converts
//! - `UnitCategory` / `CategoryGroup`: ordered collections of units
//! - `ConversionError`, `LookupError`, `GaugeError`: errors as values

mod unit;
mod category;
mod error;

pub use unit::{UnitDefinition, UnitKind, UnitRecord, InvalidUnit};
pub use category::{UnitCategory, CategoryGroup};
pub use error::{ConversionError, LookupError, GaugeError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitDefinition, UnitKind, UnitCategory, CategoryGroup};
    pub use crate::{ConversionError, LookupError, GaugeError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_conversion_error_codes() {
            let err: GaugeError = ConversionError::IncompatibleUnits {
                from: "°C".to_string(),
                to: "m".to_string(),
            }.into();
            assert_eq!(err.code, codes::INCOMPATIBLE_UNITS);
            assert!(err.message.contains("°C"));

            let err: GaugeError = ConversionError::ZeroFactor { symbol: "bad".to_string() }.into();
            assert_eq!(err.code, codes::ZERO_FACTOR);
        }

        #[test]
        fn test_lookup_error_codes() {
            let err: GaugeError = LookupError::UnknownUnit("xyz".to_string()).into();
            assert_eq!(err.code, codes::UNKNOWN_UNIT);
            assert!(err.suggestion.is_some());

            let err: GaugeError = LookupError::UnknownCategory("Nope".to_string()).into();
            assert_eq!(err.code, codes::UNKNOWN_CATEGORY);
        }

        #[test]
        fn test_error_display() {
            let err = GaugeError::category_mismatch("m", "kg");
            let display = format!("{}", err);
            assert!(display.contains("CATEGORY_MISMATCH"));
            assert!(display.contains("suggestion"));
        }

        #[test]
        fn test_error_serializes_without_empty_suggestion() {
            let err = GaugeError::arg_missing("convert", "value");
            let json = serde_json::to_string(&err).unwrap();
            assert!(!json.contains("suggestion"));
            assert!(json.contains("ARG_MISSING"));
        }
    }
}
