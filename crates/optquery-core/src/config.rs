//! Formatting profiles for query encoding.
//!
//! An [`EncoderConfig`] picks which formatter each value type goes through
//! when a writer encodes optional values. The defaults reproduce the default
//! formatters exactly.

use crate::Error;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How durations are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStyle {
    /// Compact unit form such as `1h30m0s` or `1.5ms`.
    #[default]
    Compact,
    /// ISO-8601 duration form such as `PT1H30M`.
    Iso8601,
}

/// How 64-bit floats are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatStyle {
    /// Scientific notation such as `-1.234560e+78`.
    #[default]
    Scientific,
    /// Shortest decimal form that round-trips, such as `0.25`.
    Decimal,
}

/// Formatting profile applied by query writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EncoderConfig {
    /// Duration rendering
    #[serde(default)]
    pub duration_style: DurationStyle,

    /// Float rendering
    #[serde(default)]
    pub float_style: FloatStyle,

    /// Separator placed between members of a string list
    #[validate(length(min = 1, max = 16))]
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
}

fn default_list_separator() -> String {
    ",".to_string()
}

impl EncoderConfig {
    /// Create a profile using the default formatter for every type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile with a custom list separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is empty or longer than 16 bytes.
    pub fn with_separator(separator: impl Into<String>) -> Result<Self, Error> {
        Self {
            list_separator: separator.into(),
            ..Self::default()
        }
        .validated()
    }

    /// Check the profile, returning it unchanged when every field is in range.
    ///
    /// Profiles built by hand or deserialized go through this before use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the list separator is empty or
    /// longer than 16 bytes.
    pub fn validated(self) -> Result<Self, Error> {
        self.validate()?;
        Ok(self)
    }

    /// Set the duration style.
    #[must_use]
    pub const fn with_duration_style(mut self, style: DurationStyle) -> Self {
        self.duration_style = style;
        self
    }

    /// Set the float style.
    #[must_use]
    pub const fn with_float_style(mut self, style: FloatStyle) -> Self {
        self.float_style = style;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            duration_style: DurationStyle::default(),
            float_style: FloatStyle::default(),
            list_separator: default_list_separator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::new();
        assert_eq!(config.duration_style, DurationStyle::Compact);
        assert_eq!(config.float_style, FloatStyle::Scientific);
        assert_eq!(config.list_separator, ",");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_encoder_config_builder() {
        let config = EncoderConfig::with_separator("|")
            .unwrap()
            .with_duration_style(DurationStyle::Iso8601)
            .with_float_style(FloatStyle::Decimal);

        assert_eq!(config.list_separator, "|");
        assert_eq!(config.duration_style, DurationStyle::Iso8601);
        assert_eq!(config.float_style, FloatStyle::Decimal);
    }

    #[test]
    fn test_encoder_config_empty_separator() {
        let result = EncoderConfig::with_separator("");
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn test_deserialized_config_rejected_when_separator_empty() {
        let config: EncoderConfig = serde_json::from_str(r#"{"list_separator":""}"#).unwrap();
        let err = config.validated().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let config: EncoderConfig = serde_json::from_str(r#"{"list_separator":";"}"#).unwrap();
        assert_eq!(config.validated().unwrap().list_separator, ";");
    }

    #[test]
    fn test_config_validation_separator_length() {
        let mut config = EncoderConfig::default();
        config.list_separator = "-".repeat(17);
        assert!(config.validate().is_err());

        config.list_separator = "-".repeat(16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: EncoderConfig = serde_json::from_str(r#"{"duration_style":"iso8601"}"#).unwrap();
        assert_eq!(config.duration_style, DurationStyle::Iso8601);
        assert_eq!(config.float_style, FloatStyle::Scientific);
        assert_eq!(config.list_separator, ",");
    }

    #[test]
    fn test_config_serialization() {
        let config = EncoderConfig::with_separator(";").unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EncoderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
