//! Tracing subscriber initialization.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Install the global tracing subscriber for this process.
///
/// Composes an [`EnvFilter`] (explicit level, else `CASETRACE_LOG`/`RUST_LOG`,
/// else "info") with a stderr fmt layer. Fails if a subscriber is already
/// installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match &config.log_level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_env("CASETRACE_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize from environment variables alone.
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
