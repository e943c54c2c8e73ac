// tests/common.rs
//! Shared test utilities: logging setup

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route crate logs to the test writer. `DEDUP_LOG` wins over `RUST_LOG`.
/// Idempotent, so every suite can call it first.
pub fn setup() {
    #[cfg(feature = "logging")]
    {
        let filter = EnvFilter::try_from_env(dedup::consts::ENV_LOG_FILTER)
            .unwrap_or_else(|_| EnvFilter::from_default_env());
        tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(filter)
            .try_init()
            .ok();
    }
}
