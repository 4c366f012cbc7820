//! Logging init: diagnostics go to stderr so stdout stays free for progress and reports.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when no `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize a stderr subscriber filtered by `directive` (e.g. `"info"` or
/// `"warn,wikitables_core=debug"`).
///
/// The filter is taken from the caller, never from `RUST_LOG`.
pub fn init_logging(directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level directive '{directive}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))?;

    tracing::debug!("logging initialized with filter '{}'", directive);
    Ok(())
}
