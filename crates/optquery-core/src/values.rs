//! Query parameter sets.
//!
//! [`QuerySet`] is the only operation the encoder needs from a query
//! collection: replace every value under a key with a single value.
//! [`QueryValues`] is an ordered multi-map implementation of it that can
//! serialize to and from `application/x-www-form-urlencoded` strings and URLs.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use url::{form_urlencoded, Url};

/// A collection of query parameters that supports single-value replacement.
#[cfg_attr(test, mockall::automock)]
pub trait QuerySet {
    /// Replace all values stored under `key` with `value`.
    fn set(&mut self, key: &str, value: String);
}

/// Ordered mapping from query keys to one or more values.
///
/// Keys iterate and encode in sorted order; values under one key keep their
/// insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryValues {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    /// Create a new, empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Parse a form-encoded query string such as `a=1&b=two+words`.
    ///
    /// A leading `?` is ignored. Malformed percent escapes are kept verbatim.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    /// Collect the query parameters of `url`.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs().into_owned().collect()
    }

    /// Parse `url` and collect its query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if `url` is
    /// not an absolute URL.
    pub fn from_url_str(url: &str) -> crate::Result<Self> {
        let url = Url::parse(url)?;
        Ok(Self::from_url(&url))
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values stored under `key`, empty when the key is unset.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append `value` to the values stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Remove `key` and every value stored under it.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// Returns true if `key` has at least one value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs, keys sorted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Serialize into `application/x-www-form-urlencoded` form.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.iter());
        serializer.finish()
    }

    /// Replace the query component of `url` with this set.
    ///
    /// An empty set removes the query component entirely.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
        debug!(keys = self.len(), "replaced URL query component");
    }
}

impl QuerySet for QueryValues {
    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), vec![value]);
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl Serialize for QueryValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl QuerySet for BTreeMap<String, String> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

impl QuerySet for HashMap<String, String> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

impl QuerySet for BTreeMap<String, Vec<String>> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), vec![value]);
    }
}

impl QuerySet for HashMap<String, Vec<String>> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), vec![value]);
    }
}

/// Pairs for other keys keep their order; the new pair is appended.
///
/// A write re-serializes the whole query component. Decoded keys and values
/// are preserved, but their raw form is normalized: `a%20b` becomes `a+b`,
/// a bare `flag` becomes `flag=`, and stray `%` escapes are re-escaped.
/// Skipping an absent value never calls `set`, so the URL stays byte-identical.
impl QuerySet for Url {
    fn set(&mut self, key: &str, value: String) {
        let retained: Vec<(String, String)> = self
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        self.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(key, &value);
        debug!(key, "rewrote URL query component");
    }
}
