//! Error type shared by the table, its configuration and its resize routine.

use thiserror::Error;

/// Errors reported by [`HashTable`](crate::HashTable) and [`TableConfig`](crate::TableConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table cannot be built or resized with this many buckets.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),
    /// The key was not present when removing it.
    #[error("key {0:?} not found")]
    KeyNotFound(String),
    /// The resize policy thresholds are inconsistent.
    #[error("invalid resize policy: {0}")]
    InvalidPolicy(String),
}
