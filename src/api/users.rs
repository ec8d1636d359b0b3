//! User account operations

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};
use crate::utils::errors::{Result, SocialSportsError};

use super::transport::ApiClient;

/// User-related API operations
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: Arc<ApiClient>,
    /// Registration endpoints tried in order; the backend contract is not
    /// pinned, so the candidate list is configurable
    register_endpoints: Vec<String>,
}

impl UsersApi {
    pub fn new(client: Arc<ApiClient>, register_endpoints: Vec<String>) -> Self {
        Self {
            client,
            register_endpoints,
        }
    }

    /// Register a new user.
    ///
    /// Tries each configured endpoint in sequence; the first success
    /// short-circuits. Only when every candidate fails does the last
    /// error propagate.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(SocialSportsError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }

        let body = serde_json::to_value(request)?;
        let mut last_error = None;

        for endpoint in &self.register_endpoints {
            debug!(endpoint = %endpoint, "Trying registration endpoint");
            match self
                .client
                .post_public::<RegisterResponse>(endpoint, body.clone())
                .await
            {
                Ok(response) => {
                    info!(endpoint = %endpoint, "Registration succeeded");
                    return Ok(response);
                }
                Err(e) => {
                    debug!(endpoint = %endpoint, error = %e, "Registration endpoint failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            SocialSportsError::Config("No registration endpoints configured".to_string())
        }))
    }

    /// Login with email and password. Empty credentials are rejected
    /// before any network call. A 401 here means the credentials were
    /// wrong, not that a session expired.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(SocialSportsError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }

        self.client
            .post_public("/users/login", serde_json::to_value(request)?)
            .await
            .map_err(|e| match e {
                SocialSportsError::AuthenticationRequired => SocialSportsError::Authentication(
                    "Invalid email or password".to_string(),
                ),
                other => other,
            })
    }

    /// Get the current user's profile
    pub async fn me(&self) -> Result<UserProfile> {
        self.client.get("/users/me").await
    }

    /// Get a user profile by ID
    pub async fn profile(&self, user_id: &str) -> Result<UserProfile> {
        self.client
            .get(&format!("/users/{}", urlencoding::encode(user_id)))
            .await
    }

    /// Update a user profile
    pub async fn update_profile(&self, user_id: &str, body: Value) -> Result<UserProfile> {
        self.client
            .put(&format!("/users/{}", urlencoding::encode(user_id)), body)
            .await
    }
}
