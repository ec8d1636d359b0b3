//! Stateful data-access handles
//!
//! Each handle wraps one domain API in a request/response lifecycle the
//! way a page consumes it: construct, refresh, read state, render.

pub mod auth;
pub mod events;
pub mod users;
pub mod whatsapp;

pub use auth::AuthHandle;
pub use events::{CreateEvent, EventDetail, EventsFeed, JoinEvent, MyEventsFeed};
pub use users::ProfileHandle;
pub use whatsapp::QrCodeHandle;
