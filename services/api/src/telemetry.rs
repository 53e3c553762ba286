//! Logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {}", e))?;

    Ok(())
}
