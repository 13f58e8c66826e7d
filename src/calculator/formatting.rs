//! Number parsing and formatting for the calculator display.
//!
//! Entries are kept as text while they are typed, so everything here works
//! on strings: grouping the integer part with thousand separators, turning
//! computed values back into entry text, and reading entry text as a number.

use lazy_static::lazy_static;
use regex::Regex;

/// Most digits allowed before the decimal point of an entry.
pub const MAX_INTEGER_DIGITS: usize = 9;

/// Most digits allowed after the decimal point, both for typed entries and
/// for rounded results.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Entry shown after a failed computation.
pub const ERROR: &str = "Error";

/// Entry shown after a computation overflowed.
pub const INFINITY: &str = "Infinity";

/// Results at or above this magnitude switch to exponential notation.
const EXPONENTIAL_ABOVE: f64 = 1e9;

/// Non-zero results below this magnitude switch to exponential notation.
const EXPONENTIAL_BELOW: f64 = 1e-6;

/// Significant fractional digits kept in exponential notation.
const EXPONENTIAL_DIGITS: usize = 6;

lazy_static! {
    /// Longest numeric prefix of an entry: sign, digits with an optional
    /// point, and an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"
    ).unwrap();

    /// Zero padding (and a bare point) directly before the exponent marker.
    static ref MANTISSA_ZEROS: Regex = Regex::new(
        r"\.?0+e"
    ).unwrap();
}

/// Read an entry as a number.
///
/// Like a lenient float parser, only the leading numeric part counts, so
/// partial entries such as `"12."` read as `12`. Returns `None` when there
/// is no leading number at all, which is the case for the `Error` and
/// `Infinity` markers.
pub fn parse_entry(entry: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.find(entry.trim_start())?;
    prefix.as_str().parse().ok()
}

/// Format an entry for display with thousand separators.
///
/// Only the integer part is grouped (and rounded to a whole number); the
/// fractional digits after the point are reattached exactly as typed.
/// Returns an empty string for empty input or an unreadable integer part.
pub fn format_grouped(entry: &str) -> String {
    if entry.is_empty() {
        return String::new();
    }

    let mut parts = entry.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let Some(value) = parse_entry(integer) else {
        return String::new();
    };

    let grouped = format_with_separators(value);
    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

/// Format a whole number with thousand separators.
///
/// Rounds half away from zero. Negative values, including negative zero,
/// keep their sign.
fn format_with_separators(value: f64) -> String {
    let is_negative = value.is_sign_negative();
    let digits = format!("{}", value.abs().round());

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let formatted: String = result.chars().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a computed result as the next entry.
///
/// - NaN becomes `Error`, any other non-finite value becomes `Infinity`.
/// - Very large or very small magnitudes use exponential notation with six
///   fractional digits, zero padding before the exponent removed and no `+`
///   on positive exponents (`1.5e9`, `2e-7`).
/// - Everything else is plain decimal, rounded to eight fractional digits
///   when it has more, with trailing fractional zeros removed.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return ERROR.to_string();
    }
    if !value.is_finite() {
        return INFINITY.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENTIAL_ABOVE || (magnitude > 0.0 && magnitude < EXPONENTIAL_BELOW) {
        let exponential = format!("{:.*e}", EXPONENTIAL_DIGITS, value);
        return MANTISSA_ZEROS.replace(&exponential, "e").into_owned();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let mut formatted = format!("{}", value);
    if let Some((_, fraction)) = formatted.split_once('.')
        && fraction.len() > MAX_FRACTION_DIGITS
    {
        formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    }

    trim_fraction_zeros(&formatted).to_string()
}

/// Render a number the way a plain numeric-to-text conversion does: plain
/// decimal for ordinary magnitudes, exponential with an explicit sign on the
/// exponent otherwise (`1e-7`, `1e+21`). Used for percent results, which are
/// not rounded.
pub fn format_plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            INFINITY.to_string()
        } else {
            format!("-{}", INFINITY)
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < EXPONENTIAL_BELOW {
        let exponential = format!("{:e}", value);
        if exponential.contains("e-") {
            exponential
        } else {
            exponential.replacen('e', "e+", 1)
        }
    } else {
        format!("{}", value)
    }
}

/// Strip trailing zeros after the decimal point, then a bare point.
fn trim_fraction_zeros(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}
