//! Generic request executor for the Social Sports REST API
//!
//! This is the single place that builds URLs, attaches bearer auth,
//! serializes JSON bodies and normalizes HTTP failures into
//! [`SocialSportsError`] values. Domain modules are thin named wrappers
//! over [`ApiClient::request`].

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::state::SessionStore;
use crate::utils::errors::{Result, SocialSportsError};
use crate::utils::logging;

/// Error body shape the backend uses for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the Social Sports backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("SocialSports-Client/0.1")
            .build()
            .map_err(SocialSportsError::Http)?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            session,
        })
    }

    /// The session store this client authenticates with
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Normalized base URL, always ending in `/api`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request against the backend.
    ///
    /// Semantics:
    /// - auth-required calls fail with [`SocialSportsError::AuthenticationRequired`]
    ///   before any network I/O when no token is stored
    /// - 401 clears the stored token and fails as an authentication error
    /// - 403/404 on a `/whatsapp` endpoint resolves with an empty sentinel
    ///   value instead of rejecting (the integration is best-effort)
    /// - other non-2xx parses a JSON `message` field when present
    /// - 204 resolves as an empty object
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        requires_auth: bool,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.http.request(method.clone(), &url);

        if requires_auth {
            match self.session.token() {
                Some(token) => request = request.bearer_auth(token),
                None => {
                    logging::log_api_error(endpoint, None, "no session token");
                    return Err(SocialSportsError::AuthenticationRequired);
                }
            }
        }

        if let Some(ref body) = body {
            request = request.json(body);
        }

        debug!(method = %method, url = %url, requires_auth = requires_auth, "API request");

        let response = request.send().await.map_err(|e| {
            logging::log_api_error(endpoint, None, &e.to_string());
            if e.is_timeout() {
                SocialSportsError::Timeout(endpoint.to_string())
            } else if e.is_connect() {
                SocialSportsError::ServiceUnavailable(endpoint.to_string())
            } else {
                SocialSportsError::Http(e)
            }
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Any 401 means the session is no longer valid
            self.session.clear();
            logging::log_session_event("token_invalidated", Some(endpoint));
            return Err(SocialSportsError::AuthenticationRequired);
        }

        if (status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND)
            && endpoint.contains("/whatsapp")
        {
            warn!(
                endpoint = endpoint,
                status = status.as_u16(),
                "WhatsApp endpoint unavailable, returning empty response"
            );
            return empty_value();
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            logging::log_api_error(
                endpoint,
                Some(status.as_u16()),
                message.as_deref().unwrap_or("no error body"),
            );
            return Err(SocialSportsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return empty_value();
        }

        response.json::<T>().await.map_err(|e| {
            logging::log_api_error(endpoint, Some(status.as_u16()), &e.to_string());
            SocialSportsError::Http(e)
        })
    }

    /// HEAD probe for optional backend features. Never fails: any
    /// transport error counts as "not available".
    pub async fn probe(&self, endpoint: &str) -> bool {
        let url = format!("{}{}", self.base_url, endpoint);
        match self.http.head(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(endpoint = endpoint, error = %e, "Probe failed");
                false
            }
        }
    }

    // Convenience wrappers over `request`

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::GET, endpoint, None, true).await
    }

    pub async fn get_public<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::GET, endpoint, None, false).await
    }

    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        self.request(Method::POST, endpoint, Some(body), true).await
    }

    pub async fn post_public<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        self.request(Method::POST, endpoint, Some(body), false)
            .await
    }

    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        self.request(Method::PUT, endpoint, Some(body), true).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::DELETE, endpoint, None, true).await
    }
}

/// The sentinel empty response used for soft-failed and 204 results.
/// Target types parse it via their serde defaults.
fn empty_value<T: DeserializeOwned>() -> Result<T> {
    serde_json::from_value(Value::Object(serde_json::Map::new()))
        .map_err(SocialSportsError::Serialization)
}

/// Ensure the base URL ends with `/api` without duplicating it
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{}/api", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_appends_api() {
        assert_eq!(
            normalize_base_url("http://localhost:8080"),
            "http://localhost:8080/api"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080/"),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_api() {
        assert_eq!(
            normalize_base_url("https://sports.example.com/api"),
            "https://sports.example.com/api"
        );
        assert_eq!(
            normalize_base_url("https://sports.example.com/api/"),
            "https://sports.example.com/api"
        );
    }

    #[test]
    fn test_empty_value_parses_defaultable_types() {
        let qr: crate::models::QrCodeResponse = empty_value().unwrap();
        assert!(qr.is_empty());
    }
}
