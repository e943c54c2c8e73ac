// src/config/app.rs
use std::path::Path;
use std::sync::{Once, OnceLock};

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::config_search_paths;
use crate::consts::{ENV_CACHE_DISABLED, ENV_HASH_ALGORITHM};
use crate::core::Result;
use crate::enums::HashAlgorithm;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hashing: HashingSection,
    pub cache: CacheSection,
    pub pool: PoolSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingSection {
    pub algorithm: HashAlgorithm,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolSection {
    /// Maximum idle parser instances kept around
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive, overridden by `DEDUP_LOG`
    pub filter: String,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply `DEDUP_*` environment overrides on top of the file values.
    ///
    /// Returns a notice for every override that was ignored.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        let mut notices = Vec::new();
        if let Ok(name) = std::env::var(ENV_HASH_ALGORITHM) {
            match name.parse() {
                Ok(algorithm) => self.hashing.algorithm = algorithm,
                Err(e) => notices.push(format!("ignoring {ENV_HASH_ALGORITHM}: {e}")),
            }
        }
        if std::env::var_os(ENV_CACHE_DISABLED).is_some() {
            self.cache.enabled = false;
        }
        notices
    }
}

struct Loaded {
    config: Config,
    /// Fallbacks taken while loading, held until a subscriber can see them
    notices: Vec<String>,
}

static LOADED: OnceLock<Loaded> = OnceLock::new();
static REPORTED: Once = Once::new();

fn loaded() -> &'static Loaded {
    LOADED.get_or_init(|| {
        let mut notices = Vec::new();
        let mut config = read_first_config(&mut notices).unwrap_or_default();
        notices.extend(config.apply_env_overrides());
        Loaded { config, notices }
    })
}

/// Load config once per process. Never panics; an unusable file falls back to defaults.
///
/// Emits no events, so the logging setup can read `logging.filter` from it.
pub fn load() -> &'static Config {
    &loaded().config
}

/// Fallback notices recorded by `load`.
pub fn notices() -> &'static [String] {
    &loaded().notices
}

/// Emit the load notices through `tracing`, once per process.
pub fn report_notices() {
    REPORTED.call_once(|| {
        let conf = load();
        for notice in notices() {
            warn!("{notice}");
        }
        debug!(
            algorithm = %conf.hashing.algorithm,
            cache = conf.cache.enabled,
            pool = conf.pool.capacity,
            "dedup config loaded"
        );
    });
}

fn read_first_config(notices: &mut Vec<String>) -> Option<Config> {
    let path = config_search_paths().into_iter().find(|p| p.exists())?;
    match Config::from_path(&path) {
        Ok(conf) => Some(conf),
        Err(e) => {
            notices.push(format!(
                "{} unusable ({e}); using built-in defaults",
                path.display()
            ));
            None
        }
    }
}
