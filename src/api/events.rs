//! Event operations
//!
//! One function per backend operation; no branching beyond path building.
//! All errors propagate unchanged from the transport layer.

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::models::{
    CancelEventRequest, Event, EventRequest, JoinEventRequest, ParsedEvent, SportType,
};
use crate::utils::errors::{Result, SocialSportsError};

use super::transport::ApiClient;

/// Event-related API operations
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: Arc<ApiClient>,
}

impl EventsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all events
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.client.get("/events").await
    }

    /// Get all events for the current user
    pub async fn my_events(&self) -> Result<Vec<Event>> {
        self.client.get("/events/my-events").await
    }

    /// Get a specific event by ID. A 404 surfaces as [`SocialSportsError::EventNotFound`].
    pub async fn get(&self, event_id: &str) -> Result<Event> {
        self.client
            .get(&format!("/events/{}", urlencoding::encode(event_id)))
            .await
            .map_err(|e| match e {
                SocialSportsError::Api { status: 404, .. } => SocialSportsError::EventNotFound {
                    event_id: event_id.to_string(),
                },
                other => other,
            })
    }

    /// Create a new event
    pub async fn create(&self, event: &EventRequest) -> Result<Event> {
        self.client
            .post("/events", serde_json::to_value(event)?)
            .await
    }

    /// Join an event
    pub async fn join(&self, event_id: &str, request: &JoinEventRequest) -> Result<Event> {
        self.client
            .post(
                &format!("/events/{}/join", urlencoding::encode(event_id)),
                serde_json::to_value(request)?,
            )
            .await
    }

    /// Leave an event
    pub async fn leave(&self, event_id: &str, user_id: &str) -> Result<Event> {
        self.client
            .delete(&format!(
                "/events/{}/leave/{}",
                urlencoding::encode(event_id),
                urlencoding::encode(user_id)
            ))
            .await
    }

    /// Cancel an event (creator only)
    pub async fn cancel(&self, event_id: &str, reason: Option<String>) -> Result<Event> {
        let body = CancelEventRequest { reason };
        self.client
            .post(
                &format!("/events/{}/cancel", urlencoding::encode(event_id)),
                serde_json::to_value(&body)?,
            )
            .await
    }

    /// Parse a natural-language event description
    pub async fn parse(&self, message: &str) -> Result<ParsedEvent> {
        self.client
            .request(
                Method::POST,
                "/events/parse",
                Some(json!({ "message": message })),
                false,
            )
            .await
    }

    /// Enumerate available sport types
    pub async fn sport_types(&self) -> Result<Vec<SportType>> {
        self.client.get_public("/events/sport-types").await
    }
}
