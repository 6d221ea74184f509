//! Tracing subscriber setup.

use std::sync::Once;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: Once = Once::new();

/// Installs a compact console subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only the first call installs anything; later calls return `Ok(())`.
///
/// # Errors
/// Fails if another global subscriber was installed elsewhere first.
pub fn init_logging() -> Result<()> {
    let mut result = Ok(());

    LOGGER_INITIALIZED.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_filter(env_filter);

        result = tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e));
    });

    result
}
