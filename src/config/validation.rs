//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{Result, SocialSportsError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(SocialSportsError::Config(
            "API base URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url)?;

    if config.timeout_seconds == 0 {
        return Err(SocialSportsError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    if config.register_endpoints.is_empty() {
        return Err(SocialSportsError::Config(
            "At least one registration endpoint is required".to_string(),
        ));
    }

    for endpoint in &config.register_endpoints {
        if !endpoint.starts_with('/') {
            return Err(SocialSportsError::Config(format!(
                "Registration endpoint must start with '/': {}",
                endpoint
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SocialSportsError::Config(
            "Log level is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert!(matches!(
            validate_settings(&settings),
            Err(SocialSportsError::UrlParse(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_relative_register_endpoint_rejected() {
        let mut settings = Settings::default();
        settings.api.register_endpoints = vec!["users/register".to_string()];
        assert!(validate_settings(&settings).is_err());
    }
}
