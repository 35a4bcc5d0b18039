//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use younegotiate_domain::{LoggingConfig, Result, YouNegotiateError};

/// Install the global tracing subscriber
///
/// Output goes to stderr, human-readable by default or JSON lines when
/// `logging.json` is set.
///
/// # Errors
/// Returns `YouNegotiateError::Config` if the filter does not parse or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(&config.filter)?;

    let layer = if config.json {
        fmt::layer()
            .json()
            .with_timer(fmt::time::SystemTime)
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry().with(layer.with_filter(filter)).try_init().map_err(|e| {
        YouNegotiateError::Config(format!("failed to initialize tracing subscriber: {e}"))
    })?;

    tracing::info!(filter = %config.filter, json = config.json, "logging_initialized");
    Ok(())
}

/// Parse `EnvFilter` directives from configuration
///
/// # Errors
/// Returns `YouNegotiateError::Config` naming the offending filter.
pub fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| {
        YouNegotiateError::Config(format!("failed to parse logging.filter '{filter}': {e}"))
    })
}
