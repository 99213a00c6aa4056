//! # optquery-core
//!
//! Shared types for writing optional values into URL query parameters.
//!
//! ## Modules
//!
//! - [`error`] - Error types and stable error codes
//! - [`values`] - Query parameter sets and the [`QuerySet`] seam
//! - [`config`] - Formatting profiles for query writers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod values;

// Re-export commonly used types
pub use config::{DurationStyle, EncoderConfig, FloatStyle};
pub use error::{Error, Result};
pub use values::{QuerySet, QueryValues};

// Re-exported so callers can name URLs without a direct dependency.
pub use url::Url;
