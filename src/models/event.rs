//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Sport categories supported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SportType {
    Padel,
    Tennis,
    Football,
    Basketball,
    Volleyball,
    Hockey,
    Badminton,
    Cycling,
    Running,
}

/// Normalized event lifecycle status.
///
/// The backend emits duck-typed status strings with inconsistent casing
/// ("CONFIRMED", "Open", "OPEN", "Confirmed", ...). Normalization happens
/// once here, at the deserialization boundary, so nothing downstream ever
/// re-implements string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Active,
    Cancelled,
    Completed,
    Pending,
}

impl EventStatus {
    /// Map a raw backend status string onto the closed status set
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "CONFIRMED" | "OPEN" | "ACTIVE" => EventStatus::Active,
            "CANCELLED" => EventStatus::Cancelled,
            "COMPLETED" => EventStatus::Completed,
            "PENDING" => EventStatus::Pending,
            other => {
                warn!(status = other, "Unrecognized event status, treating as pending");
                EventStatus::Pending
            }
        }
    }

    /// Canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "ACTIVE",
            EventStatus::Cancelled => "CANCELLED",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Pending => "PENDING",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EventStatus::Active)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, EventStatus::Cancelled)
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventStatus::from_raw(&raw))
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Pending
    }
}

/// Per-participant registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A user on an event roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub status: ParticipantStatus,
}

/// A scheduled sports meetup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub sport: SportType,
    pub location: String,
    pub date: DateTime<Utc>,
    pub max_players: u32,
    pub current_players: u32,
    /// 1-5 in well-formed data; displayed, not enforced
    pub skill_level: u8,
    #[serde(default)]
    pub status: EventStatus,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_group_link: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Participants still on the roster (cancelled ones are hidden from display)
    pub fn active_participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(|p| p.status != ParticipantStatus::Cancelled)
    }

    /// Whether a given user is on the roster
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }
}

/// Event creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub sport: SportType,
    pub location: String,
    pub date: DateTime<Utc>,
    pub max_players: u32,
    pub skill_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    pub creator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_phone: Option<String>,
}

/// Join event request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinEventRequest {
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
}

/// Cancel event request (creator only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of natural-language event parsing (`/events/parse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEvent {
    pub sport_type: SportType,
    pub location: String,
    pub time: DateTime<Utc>,
    /// Players besides the creator; callers add one for the creator
    pub player_count: u32,
}
