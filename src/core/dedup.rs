// src/core/dedup.rs
//! The hash operation: validate, digest, cache.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{self, Config};
use crate::core::cache::{CacheStats, HashCache};
use crate::core::pool::Pool;
use crate::core::util::content_hash;
use crate::core::validate::ParserScratch;
use crate::core::Result;
use crate::enums::HashAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DedupStats {
    pub algorithm: HashAlgorithm,
    pub cache: Option<CacheStats>,
    pub idle_parsers: usize,
}

#[derive(Debug)]
pub struct Deduplicator {
    algorithm: HashAlgorithm,
    cache: Option<HashCache>,
    parsers: Pool<ParserScratch>,
}

impl Deduplicator {
    pub fn new(algorithm: HashAlgorithm, cache_enabled: bool, pool_capacity: usize) -> Self {
        Self {
            algorithm,
            cache: cache_enabled.then(HashCache::new),
            parsers: Pool::new(pool_capacity, ParserScratch::new),
        }
    }

    pub fn from_config(conf: &Config) -> Self {
        Self::new(
            conf.hashing.algorithm,
            conf.cache.enabled,
            conf.pool.capacity,
        )
    }

    /// Validate `data` as JSON and return its hex content hash.
    ///
    /// The cache is consulted before parsing; only inputs that parse are stored.
    pub fn hash(&self, data: &[u8]) -> Result<String> {
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(data)) {
            debug!(len = data.len(), "dedup cache hit");
            return Ok(hit);
        }

        if let Err(e) = self.parsers.get().validate(data) {
            warn!(len = data.len(), "rejecting event payload: {e}");
            return Err(e);
        }

        let hash = content_hash(self.algorithm, data);
        if let Some(cache) = &self.cache {
            cache.insert(data, &hash);
        }
        debug!(len = data.len(), %hash, "hashed event payload");
        Ok(hash)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn cache(&self) -> Option<&HashCache> {
        self.cache.as_ref()
    }

    pub fn stats(&self) -> DedupStats {
        DedupStats {
            algorithm: self.algorithm,
            cache: self.cache.as_ref().map(HashCache::stats),
            idle_parsers: self.parsers.idle(),
        }
    }
}

static GLOBAL: OnceLock<Deduplicator> = OnceLock::new();

/// Process-wide instance behind the FFI exports, built from `config::load()`.
pub fn global() -> &'static Deduplicator {
    GLOBAL.get_or_init(|| Deduplicator::from_config(config::load()))
}
