//! Social Sports client SDK
//!
//! A client for the Social Sports meetup backend. This library provides
//! the typed REST surface (events, users, WhatsApp linking, stats), the
//! stateful data handles pages consume, the session token lifecycle, and
//! the demo-data fallback used when the backend is unreachable.

pub mod api;
pub mod config;
pub mod fallback;
pub mod hooks;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use api::{Api, ApiClient};
pub use config::Settings;
pub use state::{FetchLifecycle, FetchPhase, SessionStore};
pub use utils::errors::{Result, SocialSportsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
