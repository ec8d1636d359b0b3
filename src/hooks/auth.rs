//! Session lifecycle handle
//!
//! Owns login, registration, logout and token restoration. The session
//! token itself lives in the shared [`SessionStore`]; this handle tracks
//! the session-scoped user identity alongside it.

use tracing::{info, warn};

use crate::api::UsersApi;
use crate::models::{LoginRequest, RegisterRequest, UserSummary};
use crate::state::SessionStore;
use crate::utils::errors::SocialSportsError;
use crate::utils::logging;

/// Handle for the authenticated session
#[derive(Debug)]
pub struct AuthHandle {
    api: UsersApi,
    session: SessionStore,
    user: Option<UserSummary>,
    error: Option<SocialSportsError>,
    loading: bool,
}

impl AuthHandle {
    pub fn new(api: UsersApi, session: SessionStore) -> Self {
        Self {
            api,
            session,
            user: None,
            error: None,
            loading: false,
        }
    }

    /// Login with email and password. On success the token is stored in
    /// the session and the user identity is kept, tolerating both the
    /// `{token, user}` and `{token, userId}` response shapes.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.loading = true;
        self.error = None;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                self.session.store(response.token);
                self.user = response.user.or_else(|| {
                    response.user_id.map(|id| UserSummary {
                        id,
                        name: String::new(),
                        email: email.to_string(),
                        created_at: None,
                    })
                });
                logging::log_session_event("login", self.user.as_ref().map(|u| u.id.as_str()));
                self.loading = false;
                true
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.error = Some(e);
                self.loading = false;
                false
            }
        }
    }

    /// Register a new account, then establish a session. When the
    /// registration response carries no token, falls back to a regular
    /// login with the same credentials.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.loading = true;
        self.error = None;

        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone_number: None,
        };

        match self.api.register(&request).await {
            Ok(response) => {
                if let Some(token) = response.token {
                    self.session.store(token);
                    self.user = Some(response.user.unwrap_or_else(|| UserSummary {
                        id: format!("temp-{}", uuid::Uuid::new_v4()),
                        name: name.to_string(),
                        email: email.to_string(),
                        created_at: None,
                    }));
                    logging::log_session_event("register", None);
                    self.loading = false;
                    true
                } else {
                    info!("Registration returned no token, logging in");
                    self.login(email, password).await
                }
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                self.error = Some(e);
                self.loading = false;
                false
            }
        }
    }

    /// Validate a pre-existing token against `/users/me`. A rejected token
    /// is cleared so later authenticated calls fail fast.
    pub async fn restore(&mut self) -> bool {
        if !self.session.is_authenticated() {
            return false;
        }

        self.loading = true;
        match self.api.me().await {
            Ok(profile) => {
                self.user = Some(UserSummary {
                    id: profile.user_id,
                    name: profile.name,
                    email: profile.email.unwrap_or_default(),
                    created_at: profile.created_at,
                });
                self.loading = false;
                true
            }
            Err(e) => {
                warn!(error = %e, "Session restore failed, clearing token");
                self.session.clear();
                self.user = None;
                self.error = Some(e);
                self.loading = false;
                false
            }
        }
    }

    /// Destroy the session
    pub fn logout(&mut self) {
        self.session.clear();
        self.user = None;
        logging::log_session_event("logout", None);
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
