//! Tracing subscriber initialization.

use tracing_subscriber::{fmt, EnvFilter};

use finexpress_core::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level.
/// Safe to call once per process; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        _ => fmt().with_env_filter(filter).try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already initialized: {e}");
    }
}
