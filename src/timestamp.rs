//! Timestamp parsing for event timing arithmetic.
//!
//! Supports ISO 8601 / RFC 3339 strings and `YYYY-MM-DD HH:MM:SS[.fff]`
//! without a zone (assumed UTC), via [`jiff`]. Results surface as fractional
//! epoch milliseconds so downstream arithmetic can propagate NaN for bad
//! input instead of dropping the record.

use serde_json::Value;

/// Parse a JSON `time` value into epoch milliseconds.
///
/// Returns NaN when the value is absent, non-string, or unparseable; the
/// projector formats NaN arithmetic as the literal `"NaN"`.
pub fn epoch_millis(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_str)
        .and_then(parse_string)
        .map_or(f64::NAN, millis_of)
}

#[allow(clippy::cast_precision_loss)] // millisecond epochs fit f64 exactly
fn millis_of(ts: jiff::Timestamp) -> f64 {
    ts.as_millisecond() as f64
}

/// Parse a string timestamp.
fn parse_string(s: &str) -> Option<jiff::Timestamp> {
    // ISO 8601 / RFC 3339; jiff handles these natively
    if let Ok(ts) = s.parse::<jiff::Timestamp>() {
        return Some(ts);
    }

    // YYYY-MM-DD HH:MM:SS[.fff] (no timezone → assume UTC)
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = jiff::civil::DateTime::strptime(format, s)
            && let Ok(zdt) = dt.to_zoned(jiff::tz::TimeZone::UTC)
        {
            return Some(zdt.timestamp());
        }
    }

    None
}
