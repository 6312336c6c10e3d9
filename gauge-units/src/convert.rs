//! Conversion engine: single-pair and batch conversion
//!
//! Every function here is pure. Nothing is cached or logged, so callers may
//! convert from any number of threads at once.

use gauge_core::prelude::*;
use crate::ConversionResult;

/// Convert `value` from one unit to another.
///
/// Temperature and non-temperature units never mix and fail with
/// [`ConversionError::IncompatibleUnits`]. A destination with a zero
/// conversion factor yields `Ok(f64::NAN)`; use [`convert_checked`] to get
/// [`ConversionError::ZeroFactor`] instead.
///
/// Both units are expected to come from the same category.
pub fn convert(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> Result<f64, ConversionError> {
    match (from.kind, to.kind) {
        (UnitKind::Temperature { .. }, UnitKind::Temperature { .. }) => {
            Ok(temperature_conversion(value, from, to))
        }
        (UnitKind::Temperature { .. }, _) | (_, UnitKind::Temperature { .. }) => {
            Err(ConversionError::IncompatibleUnits {
                from: from.symbol.clone(),
                to: to.symbol.clone(),
            })
        }
        _ => Ok(standard_conversion(value, from, to)),
    }
}

/// Like [`convert`], but a zero destination factor is an error instead of NaN
pub fn convert_checked(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> Result<f64, ConversionError> {
    let converted = convert(value, from, to)?;
    if to.factor() == 0.0 {
        return Err(ConversionError::ZeroFactor { symbol: to.symbol.clone() });
    }
    Ok(converted)
}

/// Convert `value` into every unit of `units`, one outcome per unit, in order.
///
/// The entry whose symbol matches `from` is emitted as-is, with no arithmetic.
pub fn convert_each(
    value: f64,
    from: &UnitDefinition,
    units: &[UnitDefinition],
) -> Vec<Result<ConversionResult, ConversionError>> {
    units.iter()
        .map(|unit| {
            if unit.same_symbol(from) {
                Ok(ConversionResult::new(value, from.clone()))
            } else {
                convert_checked(value, from, unit)
                    .map(|converted| ConversionResult::new(converted, unit.clone()))
            }
        })
        .collect()
}

/// Convert `value` into every unit of `units`, omitting units that fail.
///
/// Best effort: one inconsistent unit never blocks the others, and no error
/// escapes. The result may be shorter than `units`.
pub fn convert_to_all(value: f64, from: &UnitDefinition, units: &[UnitDefinition]) -> Vec<ConversionResult> {
    convert_each(value, from, units)
        .into_iter()
        .filter_map(Result::ok)
        .collect()
}

/// Linear path through the category's implicit base unit
fn standard_conversion(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    if to.factor() == 0.0 {
        return f64::NAN;
    }
    if from == to {
        return value;
    }

    let base_value = value * from.factor();
    let output = base_value / to.factor();

    match (from.is_inverse(), to.is_inverse()) {
        (false, true) => {
            if output != 0.0 { 1.0 / output } else { output }
        }
        (true, false) => {
            if value != 0.0 { undo_source_inverse(value, base_value) } else { output }
        }
        _ => output,
    }
}

/// Inverse source landing on a linear destination.
///
/// Computes `base_value * (1 / value)`, which ignores the destination factor
/// entirely and always yields the source unit's factor. Existing results
/// depend on it, see `test_inverse_to_linear_ignores_destination_factor`.
fn undo_source_inverse(value: f64, base_value: f64) -> f64 {
    base_value * (1.0 / value)
}

/// Affine path with Celsius as the intermediate
fn temperature_conversion(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    let (UnitKind::Temperature { factor: from_factor, offset: from_offset },
         UnitKind::Temperature { factor: to_factor, offset: to_offset }) = (from.kind, to.kind)
    else {
        return f64::NAN;
    };

    if to_factor == 0.0 {
        return f64::NAN;
    }
    if from == to {
        return value;
    }

    let celsius = (value + from_offset) * from_factor;
    celsius / to_factor - to_offset
}
