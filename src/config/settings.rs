//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.
//!
//! The backend base URL is read from exactly one place: the `api.base_url`
//! setting (env: `SOCIAL_SPORTS_API__BASE_URL`), with one documented default.

use serde::{Deserialize, Serialize};

/// Main client configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend host, with or without the trailing `/api` segment
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Registration endpoints tried in order; first success wins
    pub register_endpoints: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SOCIAL_SPORTS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SocialSportsError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_seconds: 10,
                register_endpoints: vec![
                    "/users/register".to_string(),
                    "/auth/register".to_string(),
                    "/register".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
