//! # Chain Table
//!
//! A string-keyed hash table that resolves collisions by chaining.
//!
//! Every bucket holds an insertion-ordered chain of key/value pairs. The table counts how many
//! buckets are non-empty and lets a [`ResizePolicy`] grow or shrink it based on
//! `capacity / occupied_buckets`. A resize builds fresh storage, reinserts every pair under the
//! new capacity, then swaps the fresh storage in.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{HashTable, TableError};
//!
//! let mut table = HashTable::new(2).unwrap();
//!
//! table.insert("line_1", "Tiny hash table");
//! table.insert("line_2", "Filled beyond capacity");
//! table.insert("line_3", "Linked list saves the day!");
//!
//! assert_eq!(table.retrieve("line_1"), Some(&"Tiny hash table"));
//!
//! // Rehash into twice as many buckets
//! let old_capacity = table.capacity();
//! table.resize();
//! assert_eq!(table.capacity(), old_capacity * 2);
//! assert_eq!(table.retrieve("line_3"), Some(&"Linked list saves the day!"));
//!
//! // Removing a missing key is reported, not fatal
//! assert_eq!(table.remove("line_2"), Ok("Filled beyond capacity"));
//! assert_eq!(table.remove("line_2"), Err(TableError::KeyNotFound("line_2".to_string())));
//! ```
//!
//! ## Choosing a hash function
//!
//! ```rust
//! use chaintable::{HashTable, KeyHasher, djb2};
//!
//! let mut table = HashTable::with_hasher(16, KeyHasher::Djb2).unwrap();
//! table.insert("a", 1);
//! assert_eq!(djb2("a"), 177_670);
//! assert_eq!(table.bucket_index("a") as u64, djb2("a") % table.capacity() as u64);
//! ```

/// Module implementing the per-bucket collision chain
mod chain;
/// Module implementing table construction settings and the resize policy
mod config;
/// Module implementing the error type
mod error;
/// Module implementing the chained hash table
mod hash_table;
/// Module implementing the hash functions
mod hasher;
/// Logger setup
pub mod logger;
/// Utility functions and traits for the table
pub mod utils;

pub use config::{
    DEFAULT_CAPACITY, DEFAULT_GROW_ABOVE, DEFAULT_MAX_CAPACITY, DEFAULT_SHRINK_BELOW,
    ResizePolicy, TableConfig,
};
pub use error::TableError;
pub use hash_table::{HashTable, Iter, TableStats};
pub use hasher::{KeyHasher, builtin_hash, djb2};
pub use utils::TableExtensions;
