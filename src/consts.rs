// src/consts.rs
//! Shared constants: defaults and limits

/// Default number of idle parser instances kept in the pool
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Scratch buffers larger than this are shrunk back after use
pub const MAX_RETAINED_SCRATCH_BYTES: usize = 1024 * 1024;

/// Default tracing filter when neither `DEDUP_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dedup-config.toml";

/// Subdirectory of the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "event-dedup";

/// Environment variables
pub const ENV_CONFIG_PATH: &str = "DEDUP_CONFIG";
pub const ENV_HASH_ALGORITHM: &str = "DEDUP_HASH_ALGORITHM";
pub const ENV_CACHE_DISABLED: &str = "DEDUP_CACHE_DISABLED";
pub const ENV_LOG_FILTER: &str = "DEDUP_LOG";
