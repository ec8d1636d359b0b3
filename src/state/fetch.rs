//! Request/response lifecycle state
//!
//! Every data-access handle wraps its backend calls in a small state
//! machine: idle/loading, ready (data populated, error cleared) and failed
//! (error populated, previous data untouched). There is no automatic retry
//! and overlapping refreshes are not de-duplicated; the last update wins.

use crate::utils::errors::SocialSportsError;

/// Coarse phase of a fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Lifecycle state for one fetched resource
#[derive(Debug)]
pub struct FetchLifecycle<T> {
    data: Option<T>,
    error: Option<SocialSportsError>,
    loading: bool,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state. Previous data and error are kept so the
    /// consumer can keep rendering stale content during the refresh.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store a resolved value: ready state, error cleared
    pub fn resolve(&mut self, value: T) {
        self.data = Some(value);
        self.error = None;
        self.loading = false;
    }

    /// Store a failure: failed state, previous data untouched
    pub fn fail(&mut self, error: SocialSportsError) {
        self.error = Some(error);
        self.loading = false;
    }

    /// Call-site substitution of placeholder data. Sets the data without
    /// clearing the error, so the consumer can still tell the backend
    /// was unreachable.
    pub fn supply(&mut self, value: T) {
        self.data = Some(value);
        self.loading = false;
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.data.is_some() {
            FetchPhase::Ready
        } else {
            FetchPhase::Idle
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Take ownership of the data, resetting to idle
    pub fn take(&mut self) -> Option<T> {
        self.error = None;
        self.loading = false;
        self.data.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state: FetchLifecycle<Vec<u32>> = FetchLifecycle::new();
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resolve_clears_error() {
        let mut state = FetchLifecycle::new();
        state.begin();
        assert_eq!(state.phase(), FetchPhase::Loading);
        state.fail(SocialSportsError::ServiceUnavailable("down".into()));
        assert_eq!(state.phase(), FetchPhase::Failed);

        state.begin();
        state.resolve(vec![1, 2]);
        assert_eq!(state.phase(), FetchPhase::Ready);
        assert!(state.error().is_none());
        assert_eq!(state.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = FetchLifecycle::new();
        state.begin();
        state.resolve(vec![1]);

        state.begin();
        state.fail(SocialSportsError::ServiceUnavailable("down".into()));
        assert_eq!(state.phase(), FetchPhase::Failed);
        assert_eq!(state.data(), Some(&vec![1]));
    }

    #[test]
    fn test_supply_keeps_error() {
        let mut state: FetchLifecycle<Vec<u32>> = FetchLifecycle::new();
        state.begin();
        state.fail(SocialSportsError::ServiceUnavailable("down".into()));

        state.supply(vec![9]);
        assert_eq!(state.data(), Some(&vec![9]));
        assert!(state.error().is_some());
    }
}
