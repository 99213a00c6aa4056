//! Chaining writer that encodes optional values through a formatting profile.

use crate::encode::{add_slice_to_query, add_to_query, QueryValue};
use crate::format::{
    decimal_float_formatter, default_duration_formatter, default_float_formatter,
    default_time_delta_formatter, iso8601_duration_formatter, iso8601_time_delta_formatter,
    separator_formatter,
};
use chrono::TimeDelta;
use optquery_core::{DurationStyle, EncoderConfig, FloatStyle, QuerySet, Result};
use std::time::Duration;

/// Writes optional values into a borrowed query set.
///
/// Absent values are skipped; present values replace whatever the key held.
#[derive(Debug)]
pub struct QueryWriter<'q, Q: QuerySet + ?Sized> {
    query: &'q mut Q,
    config: EncoderConfig,
}

impl<'q, Q: QuerySet + ?Sized> QueryWriter<'q, Q> {
    /// Create a writer that uses the default formatter for every type.
    pub fn new(query: &'q mut Q) -> Self {
        Self {
            query,
            config: EncoderConfig::default(),
        }
    }

    /// Create a writer that formats through `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `config` is out of range, such as an
    /// empty list separator from a deserialized profile.
    pub fn with_config(query: &'q mut Q, config: EncoderConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self { query, config })
    }

    /// The active formatting profile.
    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Set `key` with the value's default formatter when the value is present.
    pub fn push_opt<T: QueryValue>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        add_to_query(&mut *self.query, key, value, T::to_query_value);
        self
    }

    /// Set `key` using a mapping function when the value is present.
    pub fn push_opt_with<T, F>(&mut self, key: &str, value: Option<T>, map: F) -> &mut Self
    where
        F: FnOnce(T) -> String,
    {
        add_to_query(&mut *self.query, key, value, map);
        self
    }

    /// Set a required key.
    pub fn push<T: QueryValue>(&mut self, key: &str, value: T) -> &mut Self {
        self.push_opt(key, Some(value))
    }

    /// Set an optional bool.
    pub fn bool(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.push_opt(key, value)
    }

    /// Set an optional duration in the configured style.
    pub fn duration(&mut self, key: &str, value: Option<Duration>) -> &mut Self {
        let formatter = match self.config.duration_style {
            DurationStyle::Compact => default_duration_formatter,
            DurationStyle::Iso8601 => iso8601_duration_formatter,
        };
        self.push_opt_with(key, value, formatter)
    }

    /// Set an optional signed time delta in the configured style.
    pub fn time_delta(&mut self, key: &str, value: Option<TimeDelta>) -> &mut Self {
        let formatter = match self.config.duration_style {
            DurationStyle::Compact => default_time_delta_formatter,
            DurationStyle::Iso8601 => iso8601_time_delta_formatter,
        };
        self.push_opt_with(key, value, formatter)
    }

    /// Set an optional float in the configured style.
    pub fn float(&mut self, key: &str, value: Option<f64>) -> &mut Self {
        let formatter = match self.config.float_style {
            FloatStyle::Scientific => default_float_formatter,
            FloatStyle::Decimal => decimal_float_formatter,
        };
        self.push_opt_with(key, value, formatter)
    }

    /// Set an optional signed integer.
    pub fn int(&mut self, key: &str, value: Option<i64>) -> &mut Self {
        self.push_opt(key, value)
    }

    /// Set an optional unsigned integer.
    pub fn uint(&mut self, key: &str, value: Option<u64>) -> &mut Self {
        self.push_opt(key, value)
    }

    /// Set an optional string, unmodified.
    pub fn string<S: Into<String>>(&mut self, key: &str, value: Option<S>) -> &mut Self {
        let value: Option<String> = value.map(Into::into);
        self.push_opt(key, value)
    }

    /// Set an optional list joined with the configured separator.
    pub fn list<S: AsRef<str>>(&mut self, key: &str, value: Option<&[S]>) -> &mut Self {
        let formatter = separator_formatter::<S>(self.config.list_separator.as_str());
        add_slice_to_query(&mut *self.query, key, value, formatter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optquery_core::QueryValues;

    #[test]
    fn push_opt_skips_none() {
        let mut q = QueryValues::new();
        QueryWriter::new(&mut q)
            .push_opt("name", Option::<String>::None)
            .bool("flag", None)
            .list("tags", None::<&[&str]>);
        assert!(q.is_empty());
    }

    #[test]
    fn push_opt_with_applies_mapper() {
        let mut q = QueryValues::new();
        QueryWriter::new(&mut q).push_opt_with("limit", Some(5u32), |v| format!("{v:02}"));
        assert_eq!(q.get("limit"), Some("05"));
    }

    #[test]
    fn default_profile_matches_default_formatters() {
        let mut q = QueryValues::new();
        QueryWriter::new(&mut q)
            .bool("enabled", Some(false))
            .duration("timeout", Some(Duration::from_secs(3_600)))
            .float("ratio", Some(0.25))
            .int("offset", Some(-3))
            .uint("limit", Some(100))
            .string("owner", Some("admin"))
            .list("tags", Some(&["a", "b"][..]))
            .push("page", 2u32);

        assert_eq!(q.get("enabled"), Some("false"));
        assert_eq!(q.get("timeout"), Some("1h0m0s"));
        assert_eq!(q.get("ratio"), Some("2.500000e-01"));
        assert_eq!(q.get("offset"), Some("-3"));
        assert_eq!(q.get("limit"), Some("100"));
        assert_eq!(q.get("owner"), Some("admin"));
        assert_eq!(q.get("tags"), Some("a,b"));
        assert_eq!(q.get("page"), Some("2"));
    }

    #[test]
    fn with_config_rejects_empty_separator() {
        let config: EncoderConfig = serde_json::from_str(r#"{"list_separator":""}"#).unwrap();

        let mut q = QueryValues::new();
        let err = QueryWriter::with_config(&mut q, config).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(q.is_empty());
    }

    #[test]
    fn configured_profile_switches_formatters() {
        let config = EncoderConfig::with_separator("|")
            .unwrap()
            .with_duration_style(DurationStyle::Iso8601)
            .with_float_style(FloatStyle::Decimal);

        let mut q = QueryValues::new();
        let mut writer = QueryWriter::with_config(&mut q, config).unwrap();
        assert_eq!(writer.config().list_separator, "|");
        writer
            .duration("timeout", Some(Duration::from_secs(5_400)))
            .time_delta("skew", Some(TimeDelta::seconds(-30)))
            .float("ratio", Some(0.25))
            .list("tags", Some(&["hello".to_string(), "world".to_string()][..]));

        assert_eq!(q.get("timeout"), Some("PT1H30M"));
        assert_eq!(q.get("skew"), Some("-PT30S"));
        assert_eq!(q.get("ratio"), Some("0.25"));
        assert_eq!(q.get("tags"), Some("hello|world"));
    }
}
