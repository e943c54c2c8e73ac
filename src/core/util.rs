//! Hashing helpers used across the core module
//!
//! All digests are rendered as lowercase hex. XXH3 values use the canonical
//! big-endian form, so the high half of a 128-bit hash comes first.

use blake3::Hasher;
use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

use crate::enums::HashAlgorithm;

/// Hex digest of `data` under the given algorithm
pub fn content_hash(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Xxh3_128 => xxh3_128_hex(data),
        HashAlgorithm::Xxh3_64 => xxh3_64_hex(data),
        HashAlgorithm::Sha256 => sha256_hex(data),
        HashAlgorithm::Blake3 => blake3_hex(data),
    }
}

pub fn xxh3_128_hex(data: &[u8]) -> String {
    hex::encode(xxh3_128(data).to_be_bytes())
}

pub fn xxh3_64_hex(data: &[u8]) -> String {
    hex::encode(xxh3_64(data).to_be_bytes())
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}
