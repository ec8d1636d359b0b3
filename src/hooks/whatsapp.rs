//! WhatsApp QR code handle
//!
//! On top of the usual loading/ready/failed lifecycle this handle latches a
//! `backend_unavailable` state, entered from the upfront availability probe
//! or from any fetch failure or empty result. While latched, refreshes are
//! no-ops; only an explicit user-triggered retry re-enters the normal
//! cycle. The integration backend is optional and frequently absent, so
//! automatic re-fetching would hammer a service that is not there.

use tracing::{debug, warn};

use crate::api::WhatsAppApi;
use crate::utils::errors::SocialSportsError;

/// Handle for the WhatsApp linking QR code
#[derive(Debug)]
pub struct QrCodeHandle {
    api: WhatsAppApi,
    qr_code: Option<String>,
    error: Option<SocialSportsError>,
    loading: bool,
    backend_unavailable: bool,
}

impl QrCodeHandle {
    pub fn new(api: WhatsAppApi) -> Self {
        Self {
            api,
            qr_code: None,
            error: None,
            loading: false,
            backend_unavailable: false,
        }
    }

    /// Probe the integration backend, then fetch the QR code when it is
    /// reachable. A failed probe latches the unavailable state without
    /// issuing the fetch.
    pub async fn init(&mut self) {
        if !self.api.probe().await {
            debug!("WhatsApp backend probe failed");
            self.backend_unavailable = true;
            return;
        }
        self.refresh().await;
    }

    /// Fetch the QR code. No-op while the backend is latched unavailable.
    pub async fn refresh(&mut self) {
        if self.backend_unavailable {
            return;
        }

        self.loading = true;
        match self.api.qr_code().await {
            Ok(response) if response.is_empty() => {
                warn!("WhatsApp QR code empty, marking backend unavailable");
                self.qr_code = None;
                self.backend_unavailable = true;
                self.loading = false;
            }
            Ok(response) => {
                self.qr_code = Some(response.qr_code_url);
                self.error = None;
                self.loading = false;
            }
            Err(e) => {
                warn!(error = %e, "WhatsApp QR code fetch failed");
                self.error = Some(e);
                self.backend_unavailable = true;
                self.loading = false;
            }
        }
    }

    /// Explicit user-triggered recovery: clears the unavailable latch and
    /// re-enters the normal fetch cycle.
    pub async fn retry(&mut self) {
        self.backend_unavailable = false;
        self.error = None;
        self.refresh().await;
    }

    pub fn qr_code(&self) -> Option<&str> {
        self.qr_code.as_deref()
    }

    pub fn backend_unavailable(&self) -> bool {
        self.backend_unavailable
    }

    pub fn error(&self) -> Option<&SocialSportsError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
