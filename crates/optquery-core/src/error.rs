//! Error types for optional query encoding.
//!
//! Writing a value into a query set never fails. The variants here cover the
//! surrounding plumbing: parsing URLs whose query component is read and
//! validating formatting profiles.

use thiserror::Error;

/// Main error type for optquery operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for optquery operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidUrl("test".to_string()).error_code(),
            "INVALID_URL"
        );
        assert_eq!(
            Error::ValidationError("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::ValidationError("list_separator".to_string());
        assert_eq!(err.to_string(), "Validation error: list_separator");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::InvalidUrl(_)));
        assert_eq!(converted.error_code(), "INVALID_URL");
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::InvalidUrl("a".to_string());
        let err2 = Error::InvalidUrl("a".to_string());
        let err3 = Error::InvalidUrl("b".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
