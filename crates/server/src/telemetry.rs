//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};

/// Builds the filter from the configured directive, falling back to `info`
/// when the directive does not parse.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber. Call once, from `main`.
pub fn init(config: &Config) {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_level));

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
