//! Gauge Units - Unit Conversion Engine
//!
//! Converts values between units of one category and renders the results.
//! Supports three unit families:
//! - Linear (m, kg, L, ...)
//! - Temperature, affine through Celsius (°C, °F, K, °R)
//! - Inverse linear, e.g. L/100km against km/L
//!
//! Categories:
//! - Length, Mass, Volume, Temperature, Time, Speed, Area
//! - Data, Pressure, Energy, Fuel Economy
//!
//! The engine functions are pure. Resolve units through a [`Catalog`] first.

mod convert;
mod format;
mod result;
mod catalog;
mod units;

pub use convert::{convert, convert_checked, convert_each, convert_to_all};
pub use format::format_value;
pub use result::ConversionResult;
pub use catalog::{Catalog, CatalogError};

pub use gauge_core::{CategoryGroup, ConversionError, LookupError, UnitCategory, UnitDefinition, UnitKind};
