//! WhatsApp integration operations
//!
//! The integration is optional and frequently absent; the transport layer
//! already downgrades 403/404 on these endpoints to an empty response.

use std::sync::Arc;

use serde_json::json;

use crate::models::{LinkResponse, QrCodeResponse, WhatsAppStatus};
use crate::utils::errors::Result;

use super::transport::ApiClient;

/// WhatsApp integration API operations
#[derive(Debug, Clone)]
pub struct WhatsAppApi {
    client: Arc<ApiClient>,
}

impl WhatsAppApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the QR code for linking. A soft-failed fetch resolves with an
    /// empty URL rather than an error.
    pub async fn qr_code(&self) -> Result<QrCodeResponse> {
        self.client.get("/whatsapp/qrcode").await
    }

    /// Current link status
    pub async fn status(&self) -> Result<WhatsAppStatus> {
        self.client.get("/whatsapp/status").await
    }

    /// Link a web account to a phone number
    pub async fn link(&self, user_id: &str, phone_number: &str) -> Result<LinkResponse> {
        self.client
            .post(
                "/whatsapp/link",
                json!({ "userId": user_id, "phoneNumber": phone_number }),
            )
            .await
    }

    /// Upfront availability probe for the integration
    pub async fn probe(&self) -> bool {
        self.client.probe("/whatsapp/status").await
    }
}
