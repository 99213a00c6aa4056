//! Conditional encoding of optional values into query sets.
//!
//! Every operation follows one rule: an absent value leaves the query set
//! untouched, a present value is formatted and [`set`](QuerySet::set) as the
//! sole value of its key. Repeating a call with the same value is a no-op.

use crate::format::{
    default_bool_formatter, default_duration_formatter, default_float_formatter,
    default_int_formatter, default_string_formatter, default_time_delta_formatter,
    default_uint_formatter,
};
use chrono::TimeDelta;
use optquery_core::QuerySet;
use std::time::Duration;
use tracing::trace;

/// A value with a default query representation.
pub trait QueryValue {
    /// Format the value with its type's default formatter.
    fn to_query_value(self) -> String;
}

impl QueryValue for bool {
    fn to_query_value(self) -> String {
        default_bool_formatter(self)
    }
}

impl QueryValue for Duration {
    fn to_query_value(self) -> String {
        default_duration_formatter(self)
    }
}

impl QueryValue for TimeDelta {
    fn to_query_value(self) -> String {
        default_time_delta_formatter(self)
    }
}

impl QueryValue for f64 {
    fn to_query_value(self) -> String {
        default_float_formatter(self)
    }
}

impl QueryValue for i64 {
    fn to_query_value(self) -> String {
        default_int_formatter(self)
    }
}

impl QueryValue for i32 {
    fn to_query_value(self) -> String {
        default_int_formatter(i64::from(self))
    }
}

impl QueryValue for u64 {
    fn to_query_value(self) -> String {
        default_uint_formatter(self)
    }
}

impl QueryValue for u32 {
    fn to_query_value(self) -> String {
        default_uint_formatter(u64::from(self))
    }
}

impl QueryValue for usize {
    fn to_query_value(self) -> String {
        default_uint_formatter(self as u64)
    }
}

impl QueryValue for String {
    fn to_query_value(self) -> String {
        default_string_formatter(self)
    }
}

impl QueryValue for &str {
    fn to_query_value(self) -> String {
        default_string_formatter(self.to_string())
    }
}

/// Formats and sets `value` under `name` iff it is present.
pub fn add_to_query<Q, T, F>(q: &mut Q, name: &str, value: Option<T>, formatter: F)
where
    Q: QuerySet + ?Sized,
    F: FnOnce(T) -> String,
{
    if let Some(value) = value {
        trace!(key = name, "setting query parameter");
        q.set(name, formatter(value));
    }
}

/// Sets `value` under `name` with its type's default formatter iff it is
/// present.
pub fn add_default_to_query<Q, T>(q: &mut Q, name: &str, value: Option<T>)
where
    Q: QuerySet + ?Sized,
    T: QueryValue,
{
    add_to_query(q, name, value, T::to_query_value);
}

/// Formats and adds optional bool `b` to `q` iff it is present.
pub fn add_bool_to_query<Q>(
    q: &mut Q,
    name: &str,
    b: Option<bool>,
    formatter: impl FnOnce(bool) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, b, formatter);
}

/// Formats and adds optional duration `d` to `q` iff it is present.
pub fn add_duration_to_query<Q>(
    q: &mut Q,
    name: &str,
    d: Option<Duration>,
    formatter: impl FnOnce(Duration) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, d, formatter);
}

/// Formats and adds optional signed time delta `d` to `q` iff it is present.
pub fn add_time_delta_to_query<Q>(
    q: &mut Q,
    name: &str,
    d: Option<TimeDelta>,
    formatter: impl FnOnce(TimeDelta) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, d, formatter);
}

/// Formats and adds optional float `f` to `q` iff it is present.
pub fn add_float64_to_query<Q>(
    q: &mut Q,
    name: &str,
    f: Option<f64>,
    formatter: impl FnOnce(f64) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, f, formatter);
}

/// Formats and adds optional integer `i` to `q` iff it is present.
pub fn add_int_to_query<Q>(
    q: &mut Q,
    name: &str,
    i: Option<i64>,
    formatter: impl FnOnce(i64) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, i, formatter);
}

/// Formats and adds optional unsigned integer `u` to `q` iff it is present.
pub fn add_uint_to_query<Q>(
    q: &mut Q,
    name: &str,
    u: Option<u64>,
    formatter: impl FnOnce(u64) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, u, formatter);
}

/// Formats and adds optional string `s` to `q` iff it is present.
pub fn add_string_to_query<Q>(
    q: &mut Q,
    name: &str,
    s: Option<String>,
    formatter: impl FnOnce(String) -> String,
) where
    Q: QuerySet + ?Sized,
{
    add_to_query(q, name, s, formatter);
}

/// Formats and adds string list `s` to `q` iff it is present.
///
/// `None` is absent. An empty list is present and goes through `formatter`
/// like any other list.
pub fn add_slice_to_query<Q, S>(
    q: &mut Q,
    name: &str,
    s: Option<&[S]>,
    formatter: impl FnOnce(&[S]) -> String,
) where
    Q: QuerySet + ?Sized,
    S: AsRef<str>,
{
    add_to_query(q, name, s, formatter);
}
