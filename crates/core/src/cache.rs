//! In-memory (co)assembly index cache.
//!
//! Keys are unordered pairs of identity hashes. A single-object query is
//! stored under `(h, h)`. Entries are never evicted or overwritten with a
//! different value for the lifetime of the owning context.

use std::collections::HashMap;

use crate::Index;

/// Unordered pair of identity hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64, u64);

impl CacheKey {
    /// Key for a pair query. `pair(a, b) == pair(b, a)`.
    pub fn pair(x_hash: u64, y_hash: u64) -> Self {
        if x_hash <= y_hash {
            Self(x_hash, y_hash)
        } else {
            Self(y_hash, x_hash)
        }
    }

    /// Key for a single-object query.
    pub fn single(hash: u64) -> Self {
        Self(hash, hash)
    }
}

/// Maps hash pairs to stored indices.
#[derive(Debug, Default)]
pub struct Cache {
    entries: HashMap<CacheKey, Index>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CacheKey) -> Option<Index> {
        self.entries.get(&key).copied()
    }

    /// Store a value, returning it for convenient tail use.
    pub fn insert(&mut self, key: CacheKey, value: Index) -> Index {
        self.entries.insert(key, value);
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
