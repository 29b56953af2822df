//! Field access over positional rows and JSON objects.

use std::str::FromStr;

use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::coerce::{self, Coerced, EpochUnit};
use super::schema::PositionalSchema;
use super::{NormalizeError, Strictness};

enum Source<'a> {
    Row {
        schema: &'static PositionalSchema,
        values: &'a [Value],
    },
    Object(&'a Map<String, Value>),
}

/// Reads typed fields out of one raw record, applying the strictness mode.
pub(crate) struct Reader<'a> {
    record: &'static str,
    mode: Strictness,
    source: Source<'a>,
}

impl<'a> Reader<'a> {
    /// Reader over a positional array described by `schema`.
    pub(crate) fn row(
        schema: &'static PositionalSchema,
        raw: &'a Value,
        mode: Strictness,
    ) -> Result<Self, NormalizeError> {
        let values = raw
            .as_array()
            .ok_or_else(|| NormalizeError::unexpected(schema.name, "array", raw))?;
        if mode.is_strict() && values.len() < schema.len() {
            return Err(NormalizeError::ShortRecord {
                record: schema.name,
                expected: schema.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            record: schema.name,
            mode,
            source: Source::Row { schema, values },
        })
    }

    /// Reader over a JSON object.
    pub(crate) fn object(
        record: &'static str,
        raw: &'a Value,
        mode: Strictness,
    ) -> Result<Self, NormalizeError> {
        let map = raw
            .as_object()
            .ok_or_else(|| NormalizeError::unexpected(record, "object", raw))?;
        Ok(Self {
            record,
            mode,
            source: Source::Object(map),
        })
    }

    /// Raw value of a field, `None` when absent.
    pub(crate) fn raw(&self, field: &'static str) -> Result<Option<&'a Value>, NormalizeError> {
        match &self.source {
            Source::Row { schema, values } => {
                let index = schema
                    .index_of(field)
                    .ok_or(NormalizeError::UnknownField {
                        record: self.record,
                        field,
                    })?;
                Ok(values.get(index))
            }
            Source::Object(map) => Ok(map.get(field)),
        }
    }

    fn path(&self, field: &str) -> String {
        format!("{}.{}", self.record, field)
    }

    fn invalid(&self, field: &str, expected: &'static str, raw: String) -> NormalizeError {
        NormalizeError::InvalidValue {
            field: self.path(field),
            expected,
            raw,
        }
    }

    fn missing(&self, field: &str) -> NormalizeError {
        NormalizeError::MissingField {
            field: self.path(field),
        }
    }

    /// Required decimal quantity. Lenient mode yields `NaN` instead of failing.
    pub(crate) fn number(&self, field: &'static str) -> Result<f64, NormalizeError> {
        match coerce::number(self.raw(field)?) {
            Coerced::Value(v) => Ok(v),
            Coerced::Invalid(raw) if self.mode.is_lenient() => {
                tracing::warn!(record = self.record, field, %raw, "unparsable number, using NaN");
                Ok(f64::NAN)
            }
            Coerced::Invalid(raw) => Err(self.invalid(field, "number", raw)),
            Coerced::Missing if self.mode.is_lenient() => {
                tracing::warn!(record = self.record, field, "missing number, using NaN");
                Ok(f64::NAN)
            }
            Coerced::Missing => Err(self.missing(field)),
        }
    }

    /// Optional decimal quantity; `null` or absent is `None`.
    pub(crate) fn opt_number(&self, field: &'static str) -> Result<Option<f64>, NormalizeError> {
        match coerce::number(self.raw(field)?) {
            Coerced::Missing => Ok(None),
            _ => self.number(field).map(Some),
        }
    }

    /// Required string. Lenient mode yields `""` when absent and the JSON text when ill-typed.
    pub(crate) fn text(&self, field: &'static str) -> Result<String, NormalizeError> {
        match coerce::text(self.raw(field)?) {
            Coerced::Value(v) => Ok(v),
            Coerced::Invalid(raw) if self.mode.is_lenient() => {
                tracing::warn!(record = self.record, field, %raw, "ill-typed string, using raw JSON");
                Ok(raw)
            }
            Coerced::Invalid(raw) => Err(self.invalid(field, "string", raw)),
            Coerced::Missing if self.mode.is_lenient() => {
                tracing::warn!(record = self.record, field, "missing string, using empty");
                Ok(String::new())
            }
            Coerced::Missing => Err(self.missing(field)),
        }
    }

    /// Optional string.
    pub(crate) fn opt_text(&self, field: &'static str) -> Result<Option<String>, NormalizeError> {
        match coerce::text(self.raw(field)?) {
            Coerced::Missing => Ok(None),
            _ => self.text(field).map(Some),
        }
    }

    /// Required integer, decoded strictly in both modes.
    pub(crate) fn integer(&self, field: &'static str) -> Result<i64, NormalizeError> {
        match coerce::integer(self.raw(field)?) {
            Coerced::Value(v) => Ok(v),
            Coerced::Invalid(raw) => Err(self.invalid(field, "integer", raw)),
            Coerced::Missing => Err(self.missing(field)),
        }
    }

    /// Required non-negative identifier or count.
    pub(crate) fn unsigned<T: TryFrom<i64>>(&self, field: &'static str) -> Result<T, NormalizeError> {
        let value = self.integer(field)?;
        T::try_from(value).map_err(|_| self.invalid(field, "unsigned integer", value.to_string()))
    }

    /// Optional non-negative identifier.
    pub(crate) fn opt_unsigned<T: TryFrom<i64>>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, NormalizeError> {
        match coerce::integer(self.raw(field)?) {
            Coerced::Missing => Ok(None),
            _ => self.unsigned(field).map(Some),
        }
    }

    /// Required enumerant, decoded strictly in both modes.
    pub(crate) fn parse<T: FromStr>(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<T, NormalizeError> {
        match coerce::text(self.raw(field)?) {
            Coerced::Value(v) => v.parse().map_err(|_| self.invalid(field, expected, v)),
            Coerced::Invalid(raw) => Err(self.invalid(field, expected, raw)),
            Coerced::Missing => Err(self.missing(field)),
        }
    }

    /// Date field; absent is `None`. Lenient mode maps unparsable dates to `None`.
    pub(crate) fn date(
        &self,
        field: &'static str,
        unit: EpochUnit,
    ) -> Result<Option<OffsetDateTime>, NormalizeError> {
        match coerce::datetime(self.raw(field)?, unit) {
            Coerced::Value(v) => Ok(Some(v)),
            Coerced::Missing => Ok(None),
            Coerced::Invalid(raw) if self.mode.is_lenient() => {
                tracing::warn!(record = self.record, field, %raw, "unparsable date, dropping");
                Ok(None)
            }
            Coerced::Invalid(raw) => Err(self.invalid(field, "date", raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use crate::normalize::schema::WALLET;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.text())
    }

    #[test]
    fn test_lenient_text_substitutions_warn() {
        let raw = json!([0, null, 1.5, 0]);
        let (text, logs) = with_captured_logs(|| {
            let row = Reader::row(&WALLET, &raw, Strictness::Lenient).unwrap();
            row.text("currency").unwrap()
        });
        assert_eq!(text, "");
        assert!(logs.contains("missing string"));
        assert!(logs.contains("currency"));

        let raw = json!({"currency": ["uah"]});
        let (text, logs) = with_captured_logs(|| {
            let obj = Reader::object("deposit", &raw, Strictness::Lenient).unwrap();
            obj.text("currency").unwrap()
        });
        assert_eq!(text, r#"["uah"]"#);
        assert!(logs.contains("ill-typed string"));
        assert!(logs.contains("deposit"));
    }

    #[test]
    fn test_strict_text_errors() {
        let raw = json!({"currency": true});
        let obj = Reader::object("deposit", &raw, Strictness::Strict).unwrap();
        assert!(matches!(
            obj.text("currency"),
            Err(NormalizeError::InvalidValue { .. })
        ));
        assert!(matches!(
            obj.text("status"),
            Err(NormalizeError::MissingField { .. })
        ));
    }
}
