//! Mock Social Sports backend for testing
//!
//! A wiremock HTTP server simulating the backend REST API. The client
//! normalizes its base URL to end in `/api`, so every mocked path is
//! prefixed accordingly.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use social_sports_client::config::{ApiConfig, Settings};
use social_sports_client::state::SessionStore;

/// Mock backend server plus the client config pointing at it
pub struct BackendMock {
    pub server: MockServer,
}

impl BackendMock {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Client configuration pointing at this mock
    pub fn api_config(&self) -> ApiConfig {
        let mut config = Settings::default().api;
        config.base_url = self.server.uri();
        config
    }

    /// A fresh unauthenticated session
    pub fn session(&self) -> SessionStore {
        SessionStore::new()
    }

    /// A session pre-seeded with a valid-looking token
    pub fn authenticated_session(&self) -> SessionStore {
        SessionStore::with_token("test-token")
    }

    /// Mount a JSON response for a method/path pair
    pub async fn mock_json(&self, http_method: &str, api_path: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(format!("/api{api_path}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a bodyless status response for a method/path pair
    pub async fn mock_status(&self, http_method: &str, api_path: &str, status: u16) {
        Mock::given(method(http_method))
            .and(path(format!("/api{api_path}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// A well-formed event payload as the backend would return it
pub fn sample_event_json(event_id: &str) -> Value {
    json!({
        "eventId": event_id,
        "sport": "PADEL",
        "location": "Padel City Amsterdam",
        "date": "2024-06-07T15:00:00Z",
        "maxPlayers": 4,
        "currentPlayers": 2,
        "skillLevel": 3,
        "status": "CONFIRMED",
        "createdBy": "user-1",
        "createdAt": "2024-06-01T09:00:00Z",
        "whatsappGroupLink": "https://chat.whatsapp.com/example1",
        "participants": [
            {
                "userId": "user-1",
                "name": "Ana",
                "joinedAt": "2024-06-01T09:00:00Z",
                "status": "CONFIRMED"
            },
            {
                "userId": "user-2",
                "name": "Ben",
                "phoneNumber": "+31600000000",
                "joinedAt": "2024-06-02T10:00:00Z",
                "status": "PENDING"
            }
        ]
    })
}
