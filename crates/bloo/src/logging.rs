//! Tracing subscriber setup for the binary.

use bloo_error::{BlooResult, ConfigError};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `verbose`
/// is set and `info` when not.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(verbose: bool, json: bool) -> BlooResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
