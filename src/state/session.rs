//! Session token storage
//!
//! The bearer token is the only client-persisted credential. It lives in an
//! explicit shared store injected into the transport layer, created on
//! login/register and destroyed on logout or when the backend rejects it
//! with a 401.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

/// Shared session store holding the bearer token
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token, e.g. restored from disk
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.store(token);
        store
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Store a new bearer token, replacing any previous one
    pub fn store(&self, token: impl Into<String>) {
        let mut guard = self.token.write().expect("session lock poisoned");
        *guard = Some(token.into());
        info!("Session token stored");
    }

    /// Destroy the session credential
    pub fn clear(&self) {
        let mut guard = self.token.write().expect("session lock poisoned");
        if guard.take().is_some() {
            debug!("Session token cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}
