// file: src/logging/logger.rs
// version: 1.0.0
// guid: 2a7c5e91-d04b-4f38-b6a2-8e13f9c4d705

//! Logger initialization and configuration

use crate::error::{MachineError, Result};
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `RUST_LOG` wins over the verbosity flags when it is set.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| MachineError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run a future inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}
