// src/logging.rs
//! stderr tracing subscriber for use inside a host process
//!
//! The cdylib has no subscriber of its own, so `warn!`/`error!` events from the
//! FFI layer would otherwise vanish. `init` installs one on first FFI entry;
//! a host that already set a global subscriber keeps it. Config fallbacks
//! recorded before the subscriber existed are reported right after.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the stderr subscriber. Idempotent.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(feature = "logging")]
fn install() {
    use tracing_subscriber::EnvFilter;

    use crate::consts::ENV_LOG_FILTER;

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_new(&crate::config::load().logging.filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::consts::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();

    crate::config::report_notices();
}

#[cfg(not(feature = "logging"))]
fn install() {
    crate::config::report_notices();
}
