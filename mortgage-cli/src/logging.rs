//! Tracing setup for the quote printer.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initializes a stderr subscriber filtered by `RUST_LOG` (default `warn`),
/// keeping diagnostics out of the quote output on stdout.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
