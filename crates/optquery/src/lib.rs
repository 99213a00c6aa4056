//! # optquery
//!
//! Write optional values into URL query parameters only when they are present.
//!
//! An absent value leaves its key exactly as it was. A present value is run
//! through a formatter and set as the key's only value.
//!
//! ```
//! use optquery::{add_int_to_query, default_int_formatter, QueryValues};
//!
//! let mut q = QueryValues::new();
//! add_int_to_query(&mut q, "offset", Some(-42), default_int_formatter);
//! add_int_to_query(&mut q, "limit", None, default_int_formatter);
//! assert_eq!(q.encode(), "offset=-42");
//! ```
//!
//! ## Modules
//!
//! - [`format`] - Default formatters plus separator and ISO-8601 alternatives
//! - [`encode`] - Per-type and generic encode operations
//! - [`writer`] - Chaining writer driven by an [`EncoderConfig`]

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod encode;
pub mod format;
pub mod writer;

pub use encode::{
    add_bool_to_query, add_default_to_query, add_duration_to_query, add_float64_to_query,
    add_int_to_query, add_slice_to_query, add_string_to_query, add_time_delta_to_query,
    add_to_query, add_uint_to_query, QueryValue,
};
pub use format::{
    decimal_float_formatter, default_bool_formatter, default_duration_formatter,
    default_float_formatter, default_int_formatter, default_string_formatter,
    default_time_delta_formatter, default_uint_formatter, iso8601_duration_formatter,
    iso8601_time_delta_formatter, separator_formatter,
};
pub use optquery_core::{
    DurationStyle, EncoderConfig, Error, FloatStyle, QuerySet, QueryValues, Result, Url,
};
pub use writer::QueryWriter;
