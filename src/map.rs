//! Identity-keyed mapping over URIs.

use std::collections::BTreeMap;

use crate::uri::Uri;

/// Key derivation function for a [`UriMap`].
pub type UriKeyFn = fn(&Uri) -> String;

fn canonical_key(uri: &Uri) -> String {
    uri.as_str().to_string()
}

/// A map keyed by a URI's canonical string.
///
/// Entries are addressed by the serialized form of the URI, so two
/// structurally equal URIs reach the same entry no matter how they were
/// originally spelled. A custom key function can widen identity further,
/// e.g. to ignore fragments. Iteration is ordered by key and re-parses
/// each stored key into a [`Uri`] lazily on every traversal.
///
/// # Examples
///
/// ```
/// use resource_uri::{Uri, UriMap};
///
/// let mut open_documents: UriMap<u32> = UriMap::new();
/// let uri = Uri::parse("file:///c:/test/me").unwrap();
/// open_documents.insert(&uri, 7);
///
/// let respelled = Uri::parse("file:///c%3A/test/me").unwrap();
/// assert_eq!(open_documents.get(&respelled), Some(&7));
/// ```
#[derive(Debug, Clone)]
pub struct UriMap<V> {
    entries: BTreeMap<String, V>,
    to_key: UriKeyFn,
}

impl<V> UriMap<V> {
    /// Creates an empty map keyed by the canonical string.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_fn(canonical_key)
    }

    /// Creates an empty map with a custom key function.
    ///
    /// Keys produced by a custom function need not be parseable URIs;
    /// entries with unparseable keys are skipped by [`keys`](UriMap::keys)
    /// and [`iter`](UriMap::iter) but remain reachable through the lookup
    /// methods.
    #[must_use]
    pub fn with_key_fn(to_key: UriKeyFn) -> Self {
        Self {
            entries: BTreeMap::new(),
            to_key,
        }
    }

    /// Inserts a value for the given URI, returning the previous value if
    /// one was present.
    pub fn insert(&mut self, uri: &Uri, value: V) -> Option<V> {
        self.entries.insert((self.to_key)(uri), value)
    }

    /// Returns the value for the given URI, if present.
    #[must_use]
    pub fn get(&self, uri: &Uri) -> Option<&V> {
        self.entries.get(&(self.to_key)(uri))
    }

    /// Returns a mutable reference to the value for the given URI, if
    /// present.
    #[must_use]
    pub fn get_mut(&mut self, uri: &Uri) -> Option<&mut V> {
        self.entries.get_mut(&(self.to_key)(uri))
    }

    /// Returns true if the map holds a value for the given URI.
    #[must_use]
    pub fn contains_key(&self, uri: &Uri) -> bool {
        self.entries.contains_key(&(self.to_key)(uri))
    }

    /// Removes the value for the given URI and returns it.
    pub fn remove(&mut self, uri: &Uri) -> Option<V> {
        self.entries.remove(&(self.to_key)(uri))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored keys, re-parsed into URIs, in key order.
    pub fn keys(&self) -> impl Iterator<Item = Uri> + '_ {
        self.entries.keys().filter_map(|key| Uri::parse(key).ok())
    }

    /// Returns `(Uri, &value)` pairs in key order, re-parsing each key
    /// lazily.
    pub fn iter(&self) -> impl Iterator<Item = (Uri, &V)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, value)| Uri::parse(key).ok().map(|uri| (uri, value)))
    }

    /// Returns the stored values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Default for UriMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
