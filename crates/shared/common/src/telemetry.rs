//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;
use crate::error::{AppError, AppResult};

/// Build the filter for the configured log level.
///
/// `RUST_LOG` is not read here; [`ServiceConfig`] already falls back to it
/// when no service-specific level is set.
pub fn log_filter(config: &ServiceConfig) -> AppResult<EnvFilter> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| AppError::config(format!("invalid log level {:?}: {}", config.log_level, e)))
}

/// Install the global tracing subscriber.
///
/// Fails with [`AppError::Config`] if the level does not parse or a global
/// subscriber already exists.
pub fn init_tracing(config: &ServiceConfig) -> AppResult<()> {
    let filter = log_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::config(e.to_string()))?;

    tracing::info!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
