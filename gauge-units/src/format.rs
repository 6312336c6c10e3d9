//! Canonical, locale-independent rendering of conversion results

/// Below this magnitude values switch to scientific notation
const SCIENTIFIC_LOW: f64 = 1e-4;
/// Above this magnitude values switch to scientific notation
const SCIENTIFIC_HIGH: f64 = 1e5;
/// Distance to the nearest integer under which a value renders as an integer
const INTEGER_TOLERANCE: f64 = 1e-5;
const SIGNIFICANT_DIGITS: usize = 5;

/// Render a value for display.
///
/// In order:
/// 1. `|v| < 1e-4` or `|v| > 1e5` (zero excluded): scientific notation with
///    5 fractional digits, e.g. `1.00000e+06`
/// 2. within `1e-5` of an integer: the integer, e.g. `5`
/// 3. otherwise: 5 significant digits with trailing zeros trimmed, e.g. `2.5`
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let magnitude = value.abs();
    if value != 0.0 && (magnitude < SCIENTIFIC_LOW || magnitude > SCIENTIFIC_HIGH) {
        return scientific(value);
    }

    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_TOLERANCE {
        // avoid "-0"
        if nearest == 0.0 {
            return "0".to_string();
        }
        return format!("{:.0}", nearest);
    }

    significant(value)
}

/// `{:.5e}` with a C-style exponent: explicit sign, at least two digits
fn scientific(value: f64) -> String {
    let raw = format!("{:.5e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}

/// Plain decimal with `SIGNIFICANT_DIGITS` significant digits, trailing zeros trimmed
fn significant(value: f64) -> String {
    // Decimal exponent after rounding to the target precision, so 9.99999
    // counts as 1.0000e1
    let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let exponent: i32 = rounded
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    trim_zeros(format!("{:.*}", decimals, value))
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
