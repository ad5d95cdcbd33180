use std::fmt;

use url::form_urlencoded;

use super::multimap::MultiMap;

/// Mergeable collection of query parameters.
///
/// Serialises to `key=value&key2=value2` with keys sorted and reserved
/// characters escaped. An empty set serialises to the empty string.
///
/// # Examples
///
/// ```
/// use courier::QuerySet;
///
/// let query: QuerySet = [("q", "rust lang"), ("page", "2")].into_iter().collect();
/// assert_eq!(query.to_query_string(), "page=2&q=rust+lang");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    inner: MultiMap,
}

impl QuerySet {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.add(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.set(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> { self.inner.remove(key) }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get_all(key).first().map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] { self.inner.get_all(key) }

    /// Fold every parameter of `other` into `self`.
    pub fn merge(&mut self, other: &QuerySet) -> &mut Self {
        self.inner.merge(&other.inner);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> { self.inner.pairs() }

    pub fn len(&self) -> usize { self.inner.len() }

    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.inner.pairs())
            .finish()
    }
}

impl fmt::Display for QuerySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuerySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = QuerySet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QuerySet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}
