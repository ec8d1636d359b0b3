//! Shared test helpers

pub mod backend_mock;
