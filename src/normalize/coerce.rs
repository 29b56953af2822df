//! Scalar coercion from loosely typed JSON values.
//!
//! Every coercion reports what happened through [`Coerced`] and leaves the
//! decision to the caller: a strict reader turns `Invalid` and `Missing` into
//! errors, a lenient one substitutes the source-compatible sentinel.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Result of coercing one JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<T> {
    /// The value was present and converted.
    Value(T),
    /// The value was present but could not be converted; holds its JSON text.
    Invalid(String),
    /// The value was absent or `null`.
    Missing,
}

impl<T> Coerced<T> {
    /// Keep only a converted value.
    pub fn ok(self) -> Option<T> {
        match self {
            Coerced::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the value was converted.
    pub fn is_value(&self) -> bool {
        matches!(self, Coerced::Value(_))
    }
}

/// Unit of numeric timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochUnit {
    /// Seconds since UNIX epoch (may be fractional).
    Seconds,
    /// Milliseconds since UNIX epoch.
    Millis,
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Coerce a JSON number or numeric string into a finite `f64`.
///
/// Numbers pass through unchanged, so coercing an already coerced value is a no-op.
pub fn number(value: Option<&Value>) -> Coerced<f64> {
    let Some(value) = present(value) else {
        return Coerced::Missing;
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Coerced::Value(v),
        _ => Coerced::Invalid(value.to_string()),
    }
}

/// Coerce a JSON integer or integer string into an `i64`.
pub fn integer(value: Option<&Value>) -> Coerced<i64> {
    let Some(value) = present(value) else {
        return Coerced::Missing;
    };
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) => Coerced::Value(v),
        None => Coerced::Invalid(value.to_string()),
    }
}

/// Read a JSON string. Numbers are accepted and rendered as text.
pub fn text(value: Option<&Value>) -> Coerced<String> {
    match present(value) {
        None => Coerced::Missing,
        Some(Value::String(s)) => Coerced::Value(s.clone()),
        Some(Value::Number(n)) => Coerced::Value(n.to_string()),
        Some(other) => Coerced::Invalid(other.to_string()),
    }
}

/// Read a JSON boolean.
pub fn boolean(value: Option<&Value>) -> Coerced<bool> {
    match present(value) {
        None => Coerced::Missing,
        Some(Value::Bool(b)) => Coerced::Value(*b),
        Some(other) => Coerced::Invalid(other.to_string()),
    }
}

/// Coerce a date.
///
/// Strings are parsed as RFC 3339, then as `YYYY-MM-DD hh:mm:ss` in UTC.
/// Numbers and numeric strings are epoch offsets in `unit`.
pub fn datetime(value: Option<&Value>, unit: EpochUnit) -> Coerced<OffsetDateTime> {
    let Some(value) = present(value) else {
        return Coerced::Missing;
    };
    let parsed = match value {
        Value::String(s) => parse_date_str(s.trim(), unit),
        Value::Number(n) => n.as_f64().and_then(|v| from_epoch(v, unit)),
        _ => None,
    };
    match parsed {
        Some(dt) => Coerced::Value(dt),
        None => Coerced::Invalid(value.to_string()),
    }
}

fn parse_date_str(s: &str, unit: EpochUnit) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt);
    }
    let naive = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(s, naive) {
        return Some(dt.assume_utc());
    }
    s.parse::<f64>().ok().and_then(|v| from_epoch(v, unit))
}

fn from_epoch(value: f64, unit: EpochUnit) -> Option<OffsetDateTime> {
    if !value.is_finite() {
        return None;
    }
    let scale: i128 = match unit {
        EpochUnit::Seconds => 1_000_000_000,
        EpochUnit::Millis => 1_000_000,
    };
    let nanos = if value.fract() == 0.0 {
        (value as i128).checked_mul(scale)?
    } else {
        (value * scale as f64).round() as i128
    };
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}
