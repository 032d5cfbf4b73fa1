//! HTTP DTOs for payment endpoints.
//!
//! Request fields are all optional on the wire; the domain normalization
//! decides what is missing and in which order to report it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payment::{CheckoutInput, TransferInput};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to pay out a shopper from the gateway balance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransferRequest {
    pub amount: Option<Decimal>,
    pub recipient_code: Option<String>,
    pub reason: Option<String>,
}

impl From<TransferRequest> for TransferInput {
    fn from(req: TransferRequest) -> Self {
        Self {
            amount: req.amount,
            recipient_code: req.recipient_code,
            reason: req.reason,
        }
    }
}

/// Request to initialize a hosted checkout page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutRequest {
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub description: Option<String>,
}

impl From<CheckoutRequest> for CheckoutInput {
    fn from(req: CheckoutRequest) -> Self {
        Self {
            email: req.email,
            amount: req.amount,
            first_name: req.first_name,
            last_name: req.last_name,
            description: req.description,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful gateway payload, passed through unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse {
    pub data: serde_json::Value,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn transfer_request_deserializes_all_fields() {
        let json = r#"{"amount": 120.5, "recipient_code": "RCP_9xk", "reason": "payout"}"#;
        let req: TransferRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.amount, Some(dec!(120.5)));
        assert_eq!(req.recipient_code, Some("RCP_9xk".to_string()));
        assert_eq!(req.reason, Some("payout".to_string()));
    }

    #[test]
    fn transfer_request_tolerates_missing_fields() {
        let req: TransferRequest = serde_json::from_str(r#"{"amount": 10}"#).unwrap();
        assert_eq!(req.amount, Some(dec!(10)));
        assert!(req.recipient_code.is_none());
        assert!(req.reason.is_none());
    }

    #[test]
    fn checkout_request_uses_camel_case_names() {
        let json = r#"{
            "email": "ada@example.com",
            "amount": 250,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "description": "Steam card"
        }"#;
        let req: CheckoutRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.first_name, Some("Ada".to_string()));
        assert_eq!(req.last_name, Some("Lovelace".to_string()));
    }

    #[test]
    fn data_response_wraps_the_payload() {
        let response = DataResponse {
            data: serde_json::json!({"authorization_url": "https://checkout.example"}),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"data":{"authorization_url":"https://checkout.example"}}"#
        );
    }

    #[test]
    fn error_response_serializes_the_message() {
        let json = serde_json::to_string(&ErrorResponse::new("Failed to initiate transfer")).unwrap();
        assert_eq!(json, r#"{"error":"Failed to initiate transfer"}"#);
    }
}
