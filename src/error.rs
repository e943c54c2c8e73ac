// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("null pointer passed across the FFI boundary")]
    NullPointer,

    #[error("unknown hash algorithm: {0:?}")]
    InvalidAlgorithm(String),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<simd_json::Error> for DedupError {
    fn from(err: simd_json::Error) -> Self {
        DedupError::InvalidJson(err.to_string())
    }
}
