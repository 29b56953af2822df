//! Response normalization.
//!
//! Kuna answers with a mix of positional arrays (`["BTCUAH", 100, 1, ...]`)
//! and objects whose numbers may arrive as strings. A [`Normalizer`] turns
//! the raw [`serde_json::Value`] of one endpoint into its typed records.
//!
//! Normalization is pure. In [`Strictness::Strict`] mode (the default) a
//! payload that does not match its layout is reported as a
//! [`NormalizeError`]. [`Strictness::Lenient`] reproduces the exchange's
//! reference client: unparsable decimals become `NaN`, missing strings become
//! empty and unparsable dates are dropped. Identifiers, counts and
//! enumerations are checked in both modes.
//!
//! ```rust
//! use kuna_api_client::normalize::Normalizer;
//! use serde_json::json;
//!
//! let book = Normalizer::default()
//!     .orderbook(&json!([[100, -2, 3], [99, 5, 1]]))
//!     .unwrap();
//! assert_eq!(book.ask[0].volume, 2.0);
//! assert_eq!(book.bid[0].price, 99.0);
//! ```

pub mod coerce;
mod details;
mod fees;
mod market;
mod reader;
pub mod schema;
mod user;

use serde_json::Value;

pub use coerce::{Coerced, EpochUnit};
pub use schema::PositionalSchema;

/// How ill-typed scalar fields are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Fail on any field that cannot be coerced.
    #[default]
    Strict,
    /// Substitute sentinels (`NaN`, `""`, `None`) for fields that cannot be coerced.
    Lenient,
}

impl Strictness {
    /// Whether this is [`Strictness::Strict`].
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }

    /// Whether this is [`Strictness::Lenient`].
    pub fn is_lenient(self) -> bool {
        self == Strictness::Lenient
    }
}

/// A payload did not match the layout expected for its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The value has the wrong JSON type.
    #[error("{what}: expected {expected}, got {found}")]
    UnexpectedShape {
        /// What was being decoded.
        what: String,
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// A positional record has fewer positions than its layout.
    #[error("{record} has {actual} positions, expected {expected}")]
    ShortRecord {
        /// Layout name.
        record: &'static str,
        /// Positions in the layout.
        expected: usize,
        /// Positions received.
        actual: usize,
    },

    /// A required field is absent or `null`.
    #[error("{field} is missing")]
    MissingField {
        /// `record.field` path.
        field: String,
    },

    /// A field is present but cannot be coerced.
    #[error("{field} is not a valid {expected}: {raw}")]
    InvalidValue {
        /// `record.field` path.
        field: String,
        /// Expected kind of value.
        expected: &'static str,
        /// JSON text of the rejected value.
        raw: String,
    },

    /// A field name does not exist in a positional layout.
    #[error("{field} is not part of the {record} layout")]
    UnknownField {
        /// Layout name.
        record: &'static str,
        /// Requested field.
        field: &'static str,
    },
}

impl NormalizeError {
    pub(crate) fn unexpected(what: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        NormalizeError::UnexpectedShape {
            what: what.into(),
            expected,
            found: json_kind(found),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts raw endpoint payloads into typed records.
///
/// One method per response family; see the module docs for the modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    mode: Strictness,
}

impl Normalizer {
    /// Create a normalizer with the given mode.
    pub fn new(mode: Strictness) -> Self {
        Self { mode }
    }

    /// Normalizer that fails on malformed fields.
    pub fn strict() -> Self {
        Self::new(Strictness::Strict)
    }

    /// Normalizer that substitutes sentinels for malformed fields.
    pub fn lenient() -> Self {
        Self::new(Strictness::Lenient)
    }

    /// The configured mode.
    pub fn mode(&self) -> Strictness {
        self.mode
    }

    /// Apply `f` to every element of a JSON array, preserving order.
    fn each<'a, T>(
        &self,
        what: &'static str,
        raw: &'a Value,
        f: impl Fn(&Self, &'a Value) -> Result<T, NormalizeError>,
    ) -> Result<Vec<T>, NormalizeError> {
        let items = raw
            .as_array()
            .ok_or_else(|| NormalizeError::unexpected(what, "array", raw))?;
        items.iter().map(|item| f(self, item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(Normalizer::default().mode(), Strictness::Strict);
        assert!(Normalizer::lenient().mode().is_lenient());
    }

    #[test]
    fn test_non_array_payload_rejected_in_both_modes() {
        for normalizer in [Normalizer::strict(), Normalizer::lenient()] {
            let err = normalizer.tickers(&json!({"error": "oops"})).unwrap_err();
            assert_eq!(
                err,
                NormalizeError::UnexpectedShape {
                    what: "tickers".into(),
                    expected: "array",
                    found: "object",
                }
            );
        }
    }
}
