//! Data models module
//!
//! This module contains the client's view of the backend data contract.

pub mod event;
pub mod stats;
pub mod user;
pub mod whatsapp;

// Re-export commonly used models
pub use event::{
    CancelEventRequest, Event, EventRequest, EventStatus, JoinEventRequest, ParsedEvent,
    Participant, ParticipantStatus, SportType,
};
pub use stats::{PlatformStats, TestDataSummary};
pub use user::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile, UserSummary,
};
pub use whatsapp::{LinkRequest, LinkResponse, QrCodeResponse, WhatsAppStatus};
