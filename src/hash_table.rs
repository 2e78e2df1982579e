use std::{fmt, iter, mem, slice};

use log::{debug, trace, warn};

use crate::{
    KeyHasher, ResizePolicy, TableConfig, TableError,
    chain::{Chain, Entry},
    config::DEFAULT_CAPACITY,
};

/// A bucket is either empty or owns a non-empty chain.
type Bucket<V> = Option<Chain<V>>;

/// A string-keyed hash table with separate chaining.
///
/// Keys are hashed with the table's [`KeyHasher`] and reduced modulo the current capacity to
/// pick a bucket. Colliding pairs are appended to the bucket's chain.
///
/// The table tracks how many buckets are non-empty and hands that count to its
/// [`ResizePolicy`] whenever a bucket becomes occupied and after every successful removal.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// The buckets, `capacity` of them
    buckets: Vec<Bucket<V>>,
    /// Number of non-empty buckets
    occupied: usize,
    /// Number of stored pairs
    size: usize,
    /// Hash function chosen at construction
    hasher: KeyHasher,
    /// When to grow or shrink
    policy: ResizePolicy,
    /// Set while the table is being rebuilt, so the rebuild never triggers another one
    resizing: bool,
}

/// A snapshot of how the pairs are spread across the buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of stored pairs
    pub len: usize,
    /// Number of non-empty buckets
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Fraction of buckets that are non-empty
    pub occupancy: f64,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, KeyHasher::default(), ResizePolicy::default())
    }
}

impl<V, K: Into<String>> Extend<(K, V)> for HashTable<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V, K: Into<String>> FromIterator<(K, V)> for HashTable<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with `capacity` buckets, the builtin hasher and the default policy.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        TableConfig::new().with_capacity(capacity).build()
    }

    /// Creates an empty table with `capacity` buckets hashed by `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: KeyHasher) -> Result<Self, TableError> {
        TableConfig::new().with_capacity(capacity).with_hasher(hasher).build()
    }

    /// Builds an empty table. `capacity` must not be zero.
    pub(crate) fn from_parts(capacity: usize, hasher: KeyHasher, policy: ResizePolicy) -> Self {
        Self {
            buckets: empty_buckets(capacity),
            occupied: 0,
            size: 0,
            hasher,
            policy,
            resizing: false,
        }
    }

    /// Hashes a key with the table's hash function
    fn hash(&self, key: &str) -> u64 {
        self.hasher.hash(key)
    }

    /// The bucket `key` belongs to under the current capacity.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    pub fn bucket_index(&self, key: &str) -> usize {
        // The remainder is below the capacity, which is a `usize`.
        (self.hash(key) % self.buckets.len() as u64) as usize
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key keeps its place in its chain and gets the new value; the old one is
    /// returned. A new key is appended to its bucket's chain. If that bucket was empty the
    /// occupied bucket count goes up and the resize policy is consulted.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.bucket_index(&key);

        let Some(bucket) = self.buckets.get_mut(index) else {
            return None;
        };

        match bucket {
            None => {
                *bucket = Some(Chain::with_entry(key, value));
                self.size = self.size.saturating_add(1);
                self.occupied = self.occupied.saturating_add(1);
                self.auto_resize();
                None
            }
            Some(chain) => {
                if let Some(existing) = chain.get_mut(&key) {
                    return Some(mem::replace(existing, value));
                }
                chain.push_back(key, value);
                self.size = self.size.saturating_add(1);
                None
            }
        }
    }

    /// The value stored under `key`, or `None` if there is none.
    pub fn retrieve(&self, key: &str) -> Option<&V> {
        self.buckets.get(self.bucket_index(key))?.as_ref()?.get(key)
    }

    /// A mutable reference to the value stored under `key`.
    pub fn retrieve_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.as_mut()?.get_mut(key)
    }

    /// True if `key` is stored in the table
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// A bucket whose chain becomes empty reverts to empty and stops counting as occupied.
    /// The resize policy is consulted after every successful removal.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] if the key is not stored. The table is unchanged.
    pub fn remove(&mut self, key: &str) -> Result<V, TableError> {
        let index = self.bucket_index(key);
        let removed = self.buckets.get_mut(index).and_then(|bucket| {
            let chain = bucket.as_mut()?;
            let position = chain.position(key)?;
            let entry = chain.remove_at(position)?;
            Some((entry, chain.is_empty()))
        });

        let Some((entry, emptied)) = removed else {
            warn!("key {key:?} not found");
            return Err(TableError::KeyNotFound(key.to_string()));
        };

        if emptied {
            if let Some(bucket) = self.buckets.get_mut(index) {
                *bucket = None;
            }
            self.occupied = self.occupied.saturating_sub(1);
        }
        self.size = self.size.saturating_sub(1);
        self.auto_resize();

        Ok(entry.value)
    }

    /// Doubles the capacity and rehashes every pair.
    pub fn resize(&mut self) {
        let new_capacity = self.capacity().saturating_mul(2);
        self.rebuild(new_capacity);
    }

    /// Moves every pair into `new_capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `new_capacity` is zero. The table is unchanged.
    pub fn resize_to(&mut self, new_capacity: usize) -> Result<(), TableError> {
        if new_capacity == 0 {
            return Err(TableError::InvalidCapacity(new_capacity));
        }
        self.rebuild(new_capacity);
        Ok(())
    }

    /// Asks the policy whether the table should change size, and does so.
    fn auto_resize(&mut self) {
        if self.resizing {
            return;
        }
        if let Some(target) = self.policy.target_capacity(self.capacity(), self.occupied) {
            trace!(
                "{} of {} buckets occupied, resizing to {target}",
                self.occupied,
                self.capacity()
            );
            self.rebuild(target);
        }
    }

    /// Builds fresh storage of `new_capacity` buckets, reinserts every pair in bucket order
    /// then chain order, and swaps the fresh storage in.
    fn rebuild(&mut self, new_capacity: usize) {
        debug!(
            "resizing table from {} to {new_capacity} buckets ({} occupied, {} pairs)",
            self.capacity(),
            self.occupied,
            self.size
        );

        self.resizing = true;
        let mut fresh = Self::from_parts(new_capacity, self.hasher, self.policy);
        fresh.resizing = true;

        for chain in mem::take(&mut self.buckets).into_iter().flatten() {
            for entry in chain {
                let (key, value) = entry.into_parts();
                fresh.insert(key, value);
            }
        }

        self.buckets = fresh.buckets;
        self.occupied = fresh.occupied;
        self.size = fresh.size;
        self.resizing = false;
    }

    /// Number of stored pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// True if the table stores nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.occupied
    }

    /// The hash function of the table
    #[must_use]
    pub fn hasher(&self) -> KeyHasher {
        self.hasher
    }

    /// The resize policy of the table
    #[must_use]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Removes every pair. The capacity is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = None;
        }
        self.occupied = 0;
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: None }
    }

    /// The length of every chain, one per bucket, empty buckets included.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|bucket| bucket.as_ref().map_or(0, Chain::len))
    }

    /// How the pairs are currently spread over the buckets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.capacity(),
            len: self.size,
            occupied_buckets: self.occupied,
            longest_chain: self.chain_lengths().max().unwrap_or(0),
            occupancy: self.occupied as f64 / self.capacity() as f64,
        }
    }
}

/// A table with `capacity` empty buckets
fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Iterator over the key-value pairs of a [`HashTable`]
#[derive(Clone)]
pub struct Iter<'a, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Bucket<V>>,
    /// Remaining entries of the current chain
    chain: Option<slice::Iter<'a, Entry<V>>>,
}

impl<V> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("buckets_left", &self.buckets.len()).finish_non_exhaustive()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(|chain| chain.next()) {
                return Some((entry.key(), &entry.value));
            }
            self.chain = self.buckets.next()?.as_ref().map(Chain::iter);
        }
    }
}
