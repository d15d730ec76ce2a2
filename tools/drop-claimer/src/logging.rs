use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Console logging to stderr, so stdout stays clean for hashes and calldata.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "info,drop_claim=debug,drop_claimer=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
