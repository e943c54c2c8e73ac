// src/core/cache.rs
//! In-memory hash cache keyed by the exact input bytes.
//!
//! No eviction and no TTL: entries live until `clear` or process exit.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct HashCache {
    entries: DashMap<Box<[u8]>, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HashCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously computed hash, counting the hit or miss.
    pub fn get(&self, data: &[u8]) -> Option<String> {
        match self.entries.get(data) {
            Some(hash) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(hash.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Racing writers for the same key store the same value, so last write wins.
    pub fn insert(&self, data: &[u8], hash: &str) {
        self.entries.insert(Box::from(data), hash.to_owned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
