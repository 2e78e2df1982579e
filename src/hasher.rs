//! Hash functions a table can be configured with.
//!
//! A table picks its hash function once, at construction. Any total, deterministic
//! `&str -> u64` function works; the two provided ones differ only in distribution quality.

use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
};

/// Seed of the DJB2 hash.
const DJB2_SEED: u32 = 5381;

/// Hashes `key` with the standard library's default hasher.
///
/// `DefaultHasher::new()` always starts from the same keys, so the result is stable for the
/// lifetime of the process.
#[must_use]
pub fn builtin_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Hashes `key` with DJB2 (`h = h * 33 + c`), truncated to 32 bits.
///
/// Characters contribute their Unicode scalar value.
#[must_use]
pub fn djb2(key: &str) -> u64 {
    let hash = key
        .chars()
        .fold(DJB2_SEED, |hash, c| (hash << 5).wrapping_add(hash).wrapping_add(u32::from(c)));
    u64::from(hash)
}

/// The hash strategy of a table.
#[derive(Clone, Copy, Default)]
pub enum KeyHasher {
    /// [`builtin_hash`].
    #[default]
    Builtin,
    /// [`djb2`].
    Djb2,
    /// A caller supplied function. It must return the same value for equal keys.
    Custom(fn(&str) -> u64),
}

impl KeyHasher {
    /// Hashes the key content.
    #[must_use]
    pub fn hash(&self, key: &str) -> u64 {
        match self {
            Self::Builtin => builtin_hash(key),
            Self::Djb2 => djb2(key),
            Self::Custom(f) => f(key),
        }
    }
}

impl fmt::Debug for KeyHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("Builtin"),
            Self::Djb2 => f.write_str("Djb2"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 177_670);
        assert_eq!(djb2("b"), 177_671);
        assert_eq!(djb2("ab"), 5_863_208);
    }

    #[test]
    fn test_djb2_fits_in_32_bits() {
        let long = "x".repeat(10_000);
        assert!(djb2(&long) <= u64::from(u32::MAX));
    }

    #[test]
    fn test_djb2_uses_scalar_values() {
        // 'é' is U+00E9
        assert_eq!(djb2("\u{e9}"), 5381 * 33 + 0xe9);
    }

    #[test]
    fn test_builtin_is_deterministic() {
        assert_eq!(builtin_hash("line_1"), builtin_hash("line_1"));
        assert_eq!(builtin_hash(&String::from("line_1")), builtin_hash("line_1"));
        assert_ne!(builtin_hash("line_1"), builtin_hash("line_2"));
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(KeyHasher::Djb2.hash("key"), djb2("key"));
        assert_eq!(KeyHasher::default().hash("key"), builtin_hash("key"));
        assert_eq!(KeyHasher::Custom(|k| k.len() as u64).hash("four"), 4);
        assert_eq!(format!("{:?}", KeyHasher::Custom(|_| 0)), "Custom(..)");
    }
}
