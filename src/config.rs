//! Construction-time settings: initial capacity, hash strategy and resize policy.

use crate::{HashTable, KeyHasher, TableError};

/// Number of buckets used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 8;

/// Ratio below which the table shrinks.
pub const DEFAULT_SHRINK_BELOW: f64 = 0.2;

/// Ratio above which the table grows.
pub const DEFAULT_GROW_ABOVE: f64 = 0.7;

/// Largest capacity automatic growth will reach.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 16;

/// When and how far a table resizes itself.
///
/// The table compares `capacity / occupied_buckets` against two thresholds every time a bucket
/// is newly occupied and after every successful removal. Below `shrink_below` the capacity is
/// halved, above `grow_above` it is doubled.
///
/// Note that "load" here counts non-empty buckets, not stored pairs, so the ratio never drops
/// below 1 and the default thresholds double the table whenever a new bucket gets occupied.
/// `max_capacity` stops that growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    /// Shrink when the ratio falls below this
    shrink_below: f64,
    /// Grow when the ratio rises above this
    grow_above: f64,
    /// Upper bound for automatic growth
    max_capacity: usize,
    /// Whether the table resizes itself at all
    automatic: bool,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            shrink_below: DEFAULT_SHRINK_BELOW,
            grow_above: DEFAULT_GROW_ABOVE,
            max_capacity: DEFAULT_MAX_CAPACITY,
            automatic: true,
        }
    }
}

impl ResizePolicy {
    /// A policy with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPolicy`] if a threshold is negative or not finite, or if
    /// `shrink_below` exceeds `grow_above`.
    pub fn new(shrink_below: f64, grow_above: f64) -> Result<Self, TableError> {
        if !shrink_below.is_finite() || !grow_above.is_finite() {
            return Err(TableError::InvalidPolicy("thresholds must be finite".to_string()));
        }
        if shrink_below < 0.0 || grow_above < 0.0 {
            return Err(TableError::InvalidPolicy("thresholds must not be negative".to_string()));
        }
        if shrink_below > grow_above {
            return Err(TableError::InvalidPolicy(format!(
                "shrink threshold {shrink_below} is above grow threshold {grow_above}"
            )));
        }
        Ok(Self { shrink_below, grow_above, ..Self::default() })
    }

    /// A policy that never resizes on its own. `resize` and `resize_to` still work.
    #[must_use]
    pub fn manual() -> Self {
        Self { automatic: false, ..Self::default() }
    }

    /// Sets the largest capacity automatic growth may reach.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPolicy`] for a zero bound.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Result<Self, TableError> {
        if max_capacity == 0 {
            return Err(TableError::InvalidPolicy("max capacity must be at least 1".to_string()));
        }
        self.max_capacity = max_capacity;
        Ok(self)
    }

    /// Shrink threshold
    #[must_use]
    pub fn shrink_below(&self) -> f64 {
        self.shrink_below
    }

    /// Grow threshold
    #[must_use]
    pub fn grow_above(&self) -> f64 {
        self.grow_above
    }

    /// Upper bound for automatic growth
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Whether the table resizes itself
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    /// The capacity a table of `capacity` buckets with `occupied` non-empty buckets should move
    /// to, or `None` if it should stay as it is.
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    pub(crate) fn target_capacity(&self, capacity: usize, occupied: usize) -> Option<usize> {
        if !self.automatic || occupied == 0 {
            return None;
        }

        let ratio = capacity as f64 / occupied as f64;
        let target = if ratio < self.shrink_below {
            (capacity / 2).max(1)
        } else if ratio > self.grow_above {
            capacity.saturating_mul(2).min(self.max_capacity.max(capacity))
        } else {
            return None;
        };

        (target != capacity).then_some(target)
    }
}

/// Builder for [`HashTable`].
///
/// ```rust
/// use chaintable::{KeyHasher, ResizePolicy, TableConfig};
///
/// let mut table = TableConfig::new()
///     .with_capacity(4)
///     .with_hasher(KeyHasher::Djb2)
///     .with_policy(ResizePolicy::manual())
///     .build()
///     .unwrap();
///
/// table.insert("answer", 42);
/// assert_eq!(table.retrieve("answer"), Some(&42));
/// assert_eq!(table.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Initial number of buckets
    capacity: usize,
    /// Hash function of the table
    hasher: KeyHasher,
    /// Resize policy of the table
    policy: ResizePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TableConfig {
    /// Default capacity, builtin hasher and default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hasher: KeyHasher::default(),
            policy: ResizePolicy::default(),
        }
    }

    /// Sets the initial number of buckets. Zero is rejected by [`TableConfig::build`].
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the hash function
    #[must_use]
    pub fn with_hasher(mut self, hasher: KeyHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Sets the resize policy
    #[must_use]
    pub fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if the capacity is zero.
    pub fn build<V>(self) -> Result<HashTable<V>, TableError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidCapacity(self.capacity));
        }
        Ok(HashTable::from_parts(self.capacity, self.hasher, self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_reference_thresholds() {
        let policy = ResizePolicy::default();
        assert!((policy.shrink_below() - 0.2).abs() < f64::EPSILON);
        assert!((policy.grow_above() - 0.7).abs() < f64::EPSILON);
        assert!(policy.is_automatic());
    }

    #[test]
    fn test_default_policy_doubles_on_any_occupancy() {
        let policy = ResizePolicy::default();
        assert_eq!(policy.target_capacity(2, 1), Some(4));
        assert_eq!(policy.target_capacity(8, 8), Some(16));
        assert_eq!(policy.target_capacity(8, 0), None);
    }

    #[test]
    fn test_growth_is_capped() {
        let policy = ResizePolicy::default().with_max_capacity(16).unwrap();
        assert_eq!(policy.target_capacity(8, 3), Some(16));
        assert_eq!(policy.target_capacity(16, 3), None);
        // Never shrinks a table that already exceeds the cap.
        assert_eq!(policy.target_capacity(64, 3), None);
    }

    #[test]
    fn test_shrink_and_steady_band() {
        let policy = ResizePolicy::new(2.0, 4.0).unwrap();
        assert_eq!(policy.target_capacity(8, 5), Some(4));
        assert_eq!(policy.target_capacity(8, 3), None);
        assert_eq!(policy.target_capacity(8, 1), Some(16));
        assert_eq!(policy.target_capacity(1, 1), None);
    }

    #[test]
    fn test_manual_never_resizes() {
        assert_eq!(ResizePolicy::manual().target_capacity(2, 2), None);
    }

    #[test]
    fn test_invalid_policies() {
        assert!(ResizePolicy::new(0.8, 0.2).is_err());
        assert!(ResizePolicy::new(-1.0, 0.2).is_err());
        assert!(ResizePolicy::new(f64::NAN, 0.2).is_err());
        assert!(ResizePolicy::default().with_max_capacity(0).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = TableConfig::new().with_capacity(0).build::<u8>();
        assert_eq!(result.err(), Some(TableError::InvalidCapacity(0)));
    }
}
