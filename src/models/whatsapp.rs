//! WhatsApp integration payload models
//!
//! All response types default cleanly so the transport layer's soft-fail
//! sentinel (an empty JSON object) parses into an empty value.

use serde::{Deserialize, Serialize};

/// QR code response from `/whatsapp/qrcode`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeResponse {
    #[serde(default)]
    pub qr_code_url: String,
}

impl QrCodeResponse {
    /// A soft-failed fetch yields an empty URL
    pub fn is_empty(&self) -> bool {
        self.qr_code_url.is_empty()
    }
}

/// Link status from `/whatsapp/status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppStatus {
    #[serde(default)]
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request body for `/whatsapp/link`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub user_id: String,
    pub phone_number: String,
}

/// Response from `/whatsapp/link`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkResponse {
    #[serde(default)]
    pub success: bool,
}
