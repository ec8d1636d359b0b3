//! Error handling for the Social Sports client
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Social Sports client
#[derive(Error, Debug)]
pub enum SocialSportsError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Authentication required. Please login again.")]
    AuthenticationRequired,

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error: {status}{}", .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Api { status: u16, message: Option<String> },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },
}

/// Result type alias for Social Sports client operations
pub type Result<T> = std::result::Result<T, SocialSportsError>;

impl SocialSportsError {
    /// Check if the error is recoverable by retrying the request
    pub fn is_recoverable(&self) -> bool {
        match self {
            SocialSportsError::Http(_) => true,
            SocialSportsError::ServiceUnavailable(_) => true,
            SocialSportsError::Timeout(_) => true,
            SocialSportsError::Api { status, .. } => *status >= 500,
            SocialSportsError::Serialization(_) => false,
            SocialSportsError::Config(_) => false,
            SocialSportsError::ConfigLoad(_) => false,
            SocialSportsError::UrlParse(_) => false,
            SocialSportsError::AuthenticationRequired => false,
            SocialSportsError::Authentication(_) => false,
            SocialSportsError::InvalidInput(_) => false,
            SocialSportsError::EventNotFound { .. } => false,
        }
    }

    /// Check if the error should force a logout (invalid session)
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            SocialSportsError::AuthenticationRequired | SocialSportsError::Authentication(_)
        )
    }

    /// The HTTP status behind the error, when one exists
    pub fn status(&self) -> Option<u16> {
        match self {
            SocialSportsError::Api { status, .. } => Some(*status),
            SocialSportsError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
