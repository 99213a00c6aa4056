//! Default and alternative formatters.
//!
//! A formatter turns a present value into its pre-encoding query string.
//! Escaping is left to whatever serializes the query set.

use chrono::TimeDelta;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Returns the bool's name in lowercase: `false` or `true`.
#[must_use]
pub fn default_bool_formatter(b: bool) -> String {
    b.to_string()
}

/// Renders a duration in compact unit form, such as `87359h59m59s` or `1.5ms`.
///
/// This is not the ISO-8601 duration format; use
/// [`iso8601_duration_formatter`] when a service expects that.
#[must_use]
pub fn default_duration_formatter(d: Duration) -> String {
    compact_duration(false, d.as_nanos())
}

/// Renders a signed time delta in compact unit form, such as `-1m30s`.
#[must_use]
pub fn default_time_delta_formatter(d: TimeDelta) -> String {
    let (negative, nanos) = split_time_delta(d);
    compact_duration(negative, nanos)
}

/// Renders `f` in scientific notation, such as `-1.234560e+78`.
#[must_use]
pub fn default_float_formatter(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let inf = if f.is_sign_positive() { "+Inf" } else { "-Inf" };
        return inf.to_string();
    }

    let formatted = format!("{f:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Renders `i` in base 10.
#[must_use]
pub fn default_int_formatter(i: i64) -> String {
    i.to_string()
}

/// Renders `u` in base 10.
#[must_use]
pub fn default_uint_formatter(u: u64) -> String {
    u.to_string()
}

/// Writes the string unmodified.
#[must_use]
pub fn default_string_formatter(s: String) -> String {
    s
}

/// Returns a formatter that inserts `separator` between each member of a list.
///
/// ```
/// use optquery::format::separator_formatter;
///
/// let join = separator_formatter::<&str>("|");
/// assert_eq!(join(&["hello", "world"]), "hello|world");
/// ```
pub fn separator_formatter<S>(separator: impl Into<String>) -> impl Fn(&[S]) -> String
where
    S: AsRef<str>,
{
    let separator = separator.into();
    move |items: &[S]| {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(separator.as_str())
    }
}

/// Renders a duration as an ISO-8601 time span, such as `PT1H30M`.
#[must_use]
pub fn iso8601_duration_formatter(d: Duration) -> String {
    iso8601_duration(false, d.as_nanos())
}

/// Renders a signed time delta as an ISO-8601 time span, such as `-PT0.5S`.
#[must_use]
pub fn iso8601_time_delta_formatter(d: TimeDelta) -> String {
    let (negative, nanos) = split_time_delta(d);
    iso8601_duration(negative, nanos)
}

/// Float rendering that round-trips with the fewest digits, such as `0.25`.
#[must_use]
pub fn decimal_float_formatter(f: f64) -> String {
    f.to_string()
}

fn split_time_delta(d: TimeDelta) -> (bool, u128) {
    let nanos = i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos());
    (nanos < 0, nanos.unsigned_abs())
}

/// Splits `v` into whole units of `10^prec` and a `.fraction` suffix with
/// trailing zeros removed.
fn split_fraction(v: u128, prec: u32) -> (u128, String) {
    let scale = 10u128.pow(prec);
    let fraction = v % scale;
    if fraction == 0 {
        return (v / scale, String::new());
    }

    let digits = format!("{fraction:0width$}", width = prec as usize);
    (v / scale, format!(".{}", digits.trim_end_matches('0')))
}

fn compact_duration(negative: bool, nanos: u128) -> String {
    let sign = if negative { "-" } else { "" };

    if nanos < NANOS_PER_SEC {
        let (prec, unit) = match nanos {
            0 => return "0s".to_string(),
            n if n < NANOS_PER_MICRO => (0, "ns"),
            n if n < NANOS_PER_MILLI => (3, "µs"),
            _ => (6, "ms"),
        };
        let (whole, fraction) = split_fraction(nanos, prec);
        return format!("{sign}{whole}{fraction}{unit}");
    }

    let (secs, fraction) = split_fraction(nanos, 9);
    let mut out = format!("{}{fraction}s", secs % 60);
    let minutes = secs / 60;
    if minutes > 0 {
        out = format!("{}m{out}", minutes % 60);
        let hours = minutes / 60;
        if hours > 0 {
            out = format!("{hours}h{out}");
        }
    }
    format!("{sign}{out}")
}

fn iso8601_duration(negative: bool, nanos: u128) -> String {
    if nanos == 0 {
        return "PT0S".to_string();
    }

    let (secs, fraction) = split_fraction(nanos, 9);
    let hours = secs / 3600;
    let minutes = secs / 60 % 60;
    let seconds = secs % 60;

    let mut out = String::from(if negative { "-PT" } else { "PT" });
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if seconds > 0 || !fraction.is_empty() {
        out.push_str(&format!("{seconds}{fraction}S"));
    }
    out
}
