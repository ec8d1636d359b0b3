//! Client-side state management
//!
//! The session token store and the per-resource fetch lifecycle machine.
//! Nothing here is persisted; the client only caches the backend's
//! last-fetched snapshot for the lifetime of the owning handle.

pub mod fetch;
pub mod session;

pub use fetch::{FetchLifecycle, FetchPhase};
pub use session::SessionStore;
