//! Utility functions and traits for `HashTable`

use crate::{HashTable, KeyHasher, ResizePolicy};

/// Extension trait for tables that provides additional utility methods
pub trait TableExtensions<V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns true if the table contains the given key
    fn contains(&self, key: &str) -> bool;
}

impl<V: Clone> TableExtensions<V> for HashTable<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_string()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }
}

/// Creates a `HashTable` from an iterator of key-value pairs
///
/// The table starts with a single bucket and lets its resize policy size it.
pub fn from_iter<K, V, I>(iter: I) -> HashTable<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::from_parts(1, KeyHasher::default(), ResizePolicy::default());
    table.extend(iter);
    table
}
