//! Stateful user profile handle

use crate::api::UsersApi;
use crate::models::UserProfile;
use crate::state::FetchLifecycle;
use crate::utils::errors::SocialSportsError;

/// Handle for a user profile, keyed by user ID
#[derive(Debug)]
pub struct ProfileHandle {
    api: UsersApi,
    user_id: String,
    state: FetchLifecycle<UserProfile>,
}

impl ProfileHandle {
    pub fn new(api: UsersApi, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            state: FetchLifecycle::new(),
        }
    }

    /// Fetch the profile. Switching to a different user discards previous
    /// state before refetching.
    pub async fn load(&mut self, user_id: &str) {
        if self.user_id != user_id {
            self.user_id = user_id.to_string();
            self.state = FetchLifecycle::new();
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.api.profile(&self.user_id).await {
            Ok(profile) => self.state.resolve(profile),
            Err(e) => self.state.fail(e),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
