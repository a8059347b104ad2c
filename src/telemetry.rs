use tracing_subscriber::{prelude::*, EnvFilter, Registry};

use crate::Result;

/// Initialize tracing
///
/// Filtering follows `RUST_LOG`, falling back to `info`. Fails when a global
/// subscriber is already installed.
pub fn init() -> Result<()> {
    let logger = tracing_subscriber::fmt::layer().compact();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default().with(logger).with(env_filter).try_init()?;
    Ok(())
}
