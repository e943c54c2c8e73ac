// src/config/mod.rs
//! Configuration system for event-dedup
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{
    load, notices, report_notices, CacheSection, Config, HashingSection, LoggingSection,
    PoolSection,
};

mod app;
mod defaults;
