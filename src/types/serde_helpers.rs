//! Custom serde helpers for Kuna's loosely typed payloads.
//!
//! Kuna sends the same numeric field as a JSON number on one endpoint and as
//! a decimal string on another. These helpers accept both for payloads that
//! are deserialized directly rather than through [`crate::normalize`].

use std::fmt;

use serde::{de, Deserialize, Deserializer};

/// Deserialize an `f64` from either a JSON number or a numeric string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use kuna_api_client::types::serde_helpers::number_or_string;
///
/// #[derive(Deserialize, Debug)]
/// struct Rate {
///     #[serde(deserialize_with = "number_or_string::deserialize")]
///     usd: f64,
/// }
///
/// let rate: Rate = serde_json::from_str(r#"{"usd":"27.5"}"#).unwrap();
/// assert_eq!(rate.usd, 27.5);
///
/// let rate: Rate = serde_json::from_str(r#"{"usd":27.5}"#).unwrap();
/// assert_eq!(rate.usd, 27.5);
/// ```
pub mod number_or_string {
    use super::*;

    struct NumberOrStringVisitor;

    impl<'de> de::Visitor<'de> for NumberOrStringVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map_err(de::Error::custom)
        }
    }

    /// Deserialize a number that may arrive as a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberOrStringVisitor)
    }
}

/// Optional variant of [`number_or_string`]; `null` becomes `None`.
pub mod optional_number_or_string {
    use super::*;

    /// Deserialize an optional number that may arrive as a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(deserialize_with = "number_or_string::deserialize")] f64);

        let opt: Option<Wrapper> = Option::deserialize(deserializer)?;
        Ok(opt.map(|Wrapper(v)| v))
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// Some Kuna fields return `""` instead of null.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use kuna_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Currency {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     explorer_link: Option<String>,
/// }
///
/// let json = r#"{"explorer_link":""}"#;
/// let currency: Currency = serde_json::from_str(json).unwrap();
/// assert!(currency.explorer_link.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Deserialize an identifier sent either as a JSON string or a JSON integer.
pub mod string_or_number {
    use super::*;

    struct StringOrNumberVisitor;

    impl<'de> de::Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    /// Deserialize a string or integer into a `String`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}
