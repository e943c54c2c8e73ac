// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DedupError;

/// Digest used for event identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "xxh3_128", alias = "xxh3")]
    Xxh3_128,
    #[serde(rename = "xxh3_64")]
    Xxh3_64,
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    /// Length of the hex string this algorithm produces
    pub const fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Xxh3_128 => 32,
            HashAlgorithm::Xxh3_64 => 16,
            HashAlgorithm::Sha256 | HashAlgorithm::Blake3 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Xxh3_128 => "xxh3_128",
            HashAlgorithm::Xxh3_64 => "xxh3_64",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DedupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xxh3" | "xxh3_128" => Ok(HashAlgorithm::Xxh3_128),
            "xxh3_64" => Ok(HashAlgorithm::Xxh3_64),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(DedupError::InvalidAlgorithm(other.to_string())),
        }
    }
}
