use super::multimap::MultiMap;

/// Ordered, mergeable collection of header entries.
///
/// A key may carry several values. [`HeaderSet::merge`] keeps the values of
/// both sides; nothing is overwritten.
///
/// # Examples
///
/// ```
/// use courier::HeaderSet;
///
/// let mut headers: HeaderSet = [("Accept", "application/json")].into_iter().collect();
/// headers.merge(&[("Accept", "text/xml")].into_iter().collect());
///
/// assert_eq!(headers.get_all("Accept"), ["application/json", "text/xml"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    inner: MultiMap,
}

impl HeaderSet {
    pub fn new() -> Self { Self::default() }

    /// Append a value under `key`, keeping existing values.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.add(key.into(), value.into());
        self
    }

    /// Replace every value under `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.set(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> { self.inner.remove(key) }

    /// First value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get_all(key).first().map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] { self.inner.get_all(key) }

    pub fn contains(&self, key: &str) -> bool { !self.inner.get_all(key).is_empty() }

    /// Fold every entry of `other` into `self`.
    pub fn merge(&mut self, other: &HeaderSet) -> &mut Self {
        self.inner.merge(&other.inner);
        self
    }

    /// Every `(key, value)` pair, keys sorted, values in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> { self.inner.pairs() }

    pub fn keys(&self) -> impl Iterator<Item = &str> { self.inner.keys() }

    /// Number of `(key, value)` pairs.
    pub fn len(&self) -> usize { self.inner.len() }

    pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = HeaderSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for HeaderSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}
