use std::collections::BTreeMap;

/// Key to many-values map shared by [`HeaderSet`](super::HeaderSet) and
/// [`QuerySet`](super::QuerySet).
///
/// Keys enumerate in sorted order, values in insertion order, so the
/// enumeration is stable for a given content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MultiMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl MultiMap {
    pub(crate) fn add(&mut self, key: String, value: String) {
        self.entries.entry(key).or_default().push(value);
    }

    pub(crate) fn set(&mut self, key: String, value: String) {
        self.entries.insert(key, vec![value]);
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    pub(crate) fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Folds every value of `other` in after the values already present.
    pub(crate) fn merge(&mut self, other: &MultiMap) {
        for (key, values) in &other.entries {
            self.entries
                .entry(key.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
    }

    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}
