//! HTTP DTOs for notification endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::notification::DispatchNotificationCommand;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A gift card request notification submission.
///
/// Only `type` is load-bearing; the detail fields render into the mail
/// body exactly as given, defaulting when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub amount: Decimal,
    pub quantity: u32,
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

impl From<NotificationRequest> for DispatchNotificationCommand {
    fn from(req: NotificationRequest) -> Self {
        Self {
            kind: req.kind,
            category: req.category,
            subcategory: req.subcategory,
            amount: req.amount,
            quantity: req.quantity,
            user_email: req.user_email,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Wire response for notification dispatch, success and failure alike.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub success: bool,
    pub message: String,
}

impl NotificationResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Notification email sent successfully".to_string(),
        }
    }

    pub fn invalid_type() -> Self {
        Self {
            success: false,
            message: "Invalid notification type".to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Failed to send notification email".to_string(),
        }
    }
}
