// src/lib.rs
//! event-dedup: JSON event hashing for deduplication, exported over a C ABI
//!
//! Features:
//! - simd-json validation with pooled parser buffers
//! - XXH3-128 content hashes by default (XXH3-64, SHA-256, BLAKE3 selectable)
//! - Lock-free in-memory cache keyed by the exact input bytes
//! - `GenerateEventHash` / `FreeEventHash` for hosts loading `libdedup`

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod logging;

// Re-export everything users need at the crate root
pub use crate::config::load as load_config;
pub use crate::core::{
    content_hash, global, is_valid_json, CacheStats, DedupStats, Deduplicator, HashCache,
    Result as CoreResult,
};
pub use crate::enums::HashAlgorithm;
pub use crate::error::DedupError;
