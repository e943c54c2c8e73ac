// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{CacheSection, HashingSection, LoggingSection, PoolSection};
use crate::consts::{
    CONFIG_DIR_NAME, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER, DEFAULT_POOL_CAPACITY,
    ENV_CONFIG_PATH,
};
use crate::enums::HashAlgorithm;

impl Default for HashingSection {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
        }
    }
}

impl Default for CacheSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for PoolSection {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

/// Candidate config files, highest priority first
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Ok(explicit) = std::env::var(ENV_CONFIG_PATH) {
        paths.push(PathBuf::from(explicit));
    }
    paths.push(PathBuf::from(DEFAULT_CONFIG_FILE));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join("config.toml"));
    }
    paths
}
