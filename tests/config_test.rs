//! Configuration loading tests
//!
//! Environment-variable overrides mutate process state, so these run
//! serialized.

use serial_test::serial;

use social_sports_client::config::Settings;

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    std::env::remove_var("SOCIAL_SPORTS_API__BASE_URL");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.api.base_url, "http://localhost:8080");
    assert_eq!(settings.api.timeout_seconds, 10);
    assert_eq!(settings.api.register_endpoints[0], "/users/register");
    assert_eq!(settings.logging.level, "info");
    settings.validate().unwrap();
}

#[test]
#[serial]
fn env_overrides_base_url() {
    std::env::set_var("SOCIAL_SPORTS_API__BASE_URL", "https://api.example.com");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.api.base_url, "https://api.example.com");
    settings.validate().unwrap();

    std::env::remove_var("SOCIAL_SPORTS_API__BASE_URL");
}

#[test]
#[serial]
fn invalid_base_url_fails_validation() {
    std::env::set_var("SOCIAL_SPORTS_API__BASE_URL", "not a url");

    let settings = Settings::new().unwrap();
    assert!(settings.validate().is_err());

    std::env::remove_var("SOCIAL_SPORTS_API__BASE_URL");
}
