//! Stateful event data handles
//!
//! Each handle owns one fetch lifecycle over the events API. Refreshes are
//! imperative; overlapping calls on clones of the same API are not
//! de-duplicated, and a failed refresh leaves previously fetched data in
//! place for the consumer to keep rendering.

use tracing::debug;

use crate::api::EventsApi;
use crate::models::{Event, EventRequest, JoinEventRequest};
use crate::state::{FetchLifecycle, FetchPhase};
use crate::utils::errors::SocialSportsError;

/// Handle for the full events listing
#[derive(Debug)]
pub struct EventsFeed {
    api: EventsApi,
    state: FetchLifecycle<Vec<Event>>,
}

impl EventsFeed {
    pub fn new(api: EventsApi) -> Self {
        Self {
            api,
            state: FetchLifecycle::new(),
        }
    }

    /// Fetch (or re-fetch) the event list
    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.api.list().await {
            Ok(events) => {
                debug!(count = events.len(), "Events fetched");
                self.state.resolve(events);
            }
            Err(e) => self.state.fail(e),
        }
    }

    /// Call-site substitution of placeholder events after a failed refresh.
    /// The error stays observable.
    pub fn supply(&mut self, events: Vec<Event>) {
        self.state.supply(events);
    }

    pub fn events(&self) -> &[Event] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn phase(&self) -> FetchPhase {
        self.state.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Handle for the current user's events (authenticated)
#[derive(Debug)]
pub struct MyEventsFeed {
    api: EventsApi,
    state: FetchLifecycle<Vec<Event>>,
}

impl MyEventsFeed {
    pub fn new(api: EventsApi) -> Self {
        Self {
            api,
            state: FetchLifecycle::new(),
        }
    }

    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.api.my_events().await {
            Ok(events) => self.state.resolve(events),
            Err(e) => self.state.fail(e),
        }
    }

    pub fn supply(&mut self, events: Vec<Event>) {
        self.state.supply(events);
    }

    pub fn events(&self) -> &[Event] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Handle for a single event, keyed by event ID
#[derive(Debug)]
pub struct EventDetail {
    api: EventsApi,
    event_id: String,
    state: FetchLifecycle<Event>,
}

impl EventDetail {
    pub fn new(api: EventsApi, event_id: impl Into<String>) -> Self {
        Self {
            api,
            event_id: event_id.into(),
            state: FetchLifecycle::new(),
        }
    }

    /// Fetch the event. Switching to a different ID discards previous state
    /// before refetching.
    pub async fn load(&mut self, event_id: &str) {
        if self.event_id != event_id {
            self.event_id = event_id.to_string();
            self.state = FetchLifecycle::new();
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.begin();
        match self.api.get(&self.event_id).await {
            Ok(event) => self.state.resolve(event),
            Err(e) => self.state.fail(e),
        }
    }

    pub fn event(&self) -> Option<&Event> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Mutation handle for creating events
#[derive(Debug)]
pub struct CreateEvent {
    api: EventsApi,
    state: FetchLifecycle<Event>,
    success: bool,
}

impl CreateEvent {
    pub fn new(api: EventsApi) -> Self {
        Self {
            api,
            state: FetchLifecycle::new(),
            success: false,
        }
    }

    /// Submit a create request. On success the created event is stored
    /// exactly as the backend returned it and `success` latches true;
    /// the call site is responsible for resetting its own UI state.
    pub async fn create(&mut self, request: &EventRequest) {
        self.state.begin();
        self.success = false;
        match self.api.create(request).await {
            Ok(event) => {
                self.state.resolve(event);
                self.success = true;
            }
            Err(e) => self.state.fail(e),
        }
    }

    pub fn created_event(&self) -> Option<&Event> {
        self.state.data()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

/// Mutation handle for joining events
#[derive(Debug)]
pub struct JoinEvent {
    api: EventsApi,
    state: FetchLifecycle<Event>,
    success: bool,
}

impl JoinEvent {
    pub fn new(api: EventsApi) -> Self {
        Self {
            api,
            state: FetchLifecycle::new(),
            success: false,
        }
    }

    /// Join an event. `success` resets at the start of every attempt and
    /// is never cleared automatically afterwards.
    pub async fn join(&mut self, event_id: &str, name: &str, phone: Option<&str>) {
        self.state.begin();
        self.success = false;
        let request = JoinEventRequest {
            user_name: name.to_string(),
            user_phone: phone.map(str::to_string),
        };
        match self.api.join(event_id, &request).await {
            Ok(event) => {
                self.state.resolve(event);
                self.success = true;
            }
            Err(e) => self.state.fail(e),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn event(&self) -> Option<&Event> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
