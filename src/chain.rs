//! The per-bucket collision chain.

use std::slice;

/// A key/value pair stored in a chain.
///
/// The key never changes once stored; only the value is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<V> {
    /// The key of the pair
    key: String,
    /// The value associated with the key
    pub(crate) value: V,
}

impl<V> Entry<V> {
    /// Creates a new entry
    pub(crate) fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    /// The key of the entry
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Splits the entry back into its key and value
    pub(crate) fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

/// Entries that share a bucket, in insertion order.
///
/// Backed by a `Vec`: removing an entry splices it out and keeps the order of the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chain<V> {
    /// The entries of the chain
    entries: Vec<Entry<V>>,
}

impl<V> Chain<V> {
    /// Creates a chain holding a single entry
    pub(crate) fn with_entry(key: String, value: V) -> Self {
        Self { entries: vec![Entry::new(key, value)] }
    }

    /// Appends an entry at the tail
    pub(crate) fn push_back(&mut self, key: String, value: V) {
        self.entries.push(Entry::new(key, value));
    }

    /// Position of the first entry whose key matches
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// Value of the first entry whose key matches
    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|entry| entry.key() == key).map(|entry| &entry.value)
    }

    /// Mutable value of the first entry whose key matches
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.iter_mut().find(|entry| entry.key() == key).map(|entry| &mut entry.value)
    }

    /// Removes the entry at `position`, if there is one
    pub(crate) fn remove_at(&mut self, position: usize) -> Option<Entry<V>> {
        (position < self.entries.len()).then(|| self.entries.remove(position))
    }

    /// Number of entries
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the chain holds nothing
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order
    pub(crate) fn iter(&self) -> slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = Entry<V>;
    type IntoIter = std::vec::IntoIter<Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
