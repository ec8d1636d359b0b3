//! Utility modules
//!
//! This module contains common utilities used throughout the client,
//! including error handling, logging setup, and display formatting helpers.

pub mod errors;
pub mod format;
pub mod logging;

pub use errors::{Result, SocialSportsError};
