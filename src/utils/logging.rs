//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the Social Sports client.

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log API request failures with context
pub fn log_api_error(endpoint: &str, status: Option<u16>, error: &str) {
    error!(
        endpoint = endpoint,
        status = status,
        error = error,
        "API request failed"
    );
}

/// Log session lifecycle transitions
pub fn log_session_event(event: &str, details: Option<&str>) {
    info!(event = event, details = details, "Session event");
}

/// Log call-site fallback substitutions
pub fn log_fallback(context: &str, reason: &str) {
    warn!(
        context = context,
        reason = reason,
        "Backend unavailable, substituting demo data"
    );
}
