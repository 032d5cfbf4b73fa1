//! Paystack payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against Paystack's HTTP API:
//! - `POST /transaction/initialize` for hosted checkout
//! - `POST /transfer` for balance-funded payouts
//!
//! # Security
//!
//! - The secret key is held in `secrecy::SecretString` and only ever leaves
//!   as the bearer credential; it appears in no log line and no outcome.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PaystackConfig::new("sk_test_...")
//!     .with_base_url("http://localhost:8080");
//! let gateway = PaystackGateway::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::GatewayConfig;
use crate::domain::payment::{GatewayCall, GatewayOutcome};
use crate::ports::PaymentGateway;

/// Paystack API configuration.
#[derive(Clone)]
pub struct PaystackConfig {
    /// Paystack secret key (sk_live_... or sk_test_...).
    secret_key: SecretString,

    /// Base URL for the Paystack API (default: https://api.paystack.co).
    base_url: String,

    /// Timeout applied to each outbound request.
    request_timeout: Duration,
}

impl PaystackConfig {
    /// Create a new configuration with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: SecretString::new(secret_key.into()),
            base_url: "https://api.paystack.co".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Build adapter configuration from the application gateway section.
    pub fn from_app_config(config: &GatewayConfig) -> Self {
        Self {
            secret_key: SecretString::new(config.secret_key.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Paystack response envelope.
///
/// Every endpoint answers `{status, message, data}`; only `message` and
/// `data` are read here. Error bodies frequently omit `data`.
#[derive(Debug, Deserialize)]
struct PaystackEnvelope {
    #[serde(default)]
    message: String,

    #[serde(default)]
    data: serde_json::Value,
}

/// Paystack gateway adapter.
///
/// Performs exactly one outbound POST per `submit` invocation and classifies
/// the result; it never retries. Timeouts surface as transport failures.
pub struct PaystackGateway {
    config: PaystackConfig,
    http_client: Client,
}

impl PaystackGateway {
    /// Create a new gateway adapter with the given configuration.
    pub fn new(config: PaystackConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Endpoint URL for a call.
    fn endpoint(&self, call: &GatewayCall) -> String {
        match call {
            GatewayCall::InitializeTransaction(_) => {
                format!("{}/transaction/initialize", self.config.base_url)
            }
            GatewayCall::CreateTransfer(_) => format!("{}/transfer", self.config.base_url),
        }
    }

    /// Wire payload for a call. Amounts go out in minor units.
    fn request_body(call: &GatewayCall) -> serde_json::Value {
        match call {
            GatewayCall::InitializeTransaction(order) => json!({
                "email": order.email,
                "amount": order.amount.minor_units(),
                "firstName": order.first_name,
                "lastName": order.last_name,
                "description": order.description,
            }),
            GatewayCall::CreateTransfer(order) => json!({
                "source": "balance",
                "amount": order.amount.minor_units(),
                "recipient": order.recipient_code,
                "reason": order.reason,
            }),
        }
    }

    /// Classify a parsed response into an outcome.
    fn classify(
        operation: &'static str,
        status: StatusCode,
        envelope: PaystackEnvelope,
    ) -> GatewayOutcome {
        if status.is_success() {
            tracing::info!(
                operation,
                http_status = status.as_u16(),
                "Gateway call succeeded"
            );
            return GatewayOutcome::Success {
                data: envelope.data,
            };
        }

        let message = if envelope.message.is_empty() {
            Self::rejection_fallback(operation).to_string()
        } else {
            envelope.message
        };

        tracing::warn!(
            operation,
            http_status = status.as_u16(),
            message = %message,
            "Gateway rejected the call"
        );

        GatewayOutcome::Rejected {
            status: status.as_u16(),
            message,
        }
    }

    /// Message shown when a rejection carries no usable message.
    fn rejection_fallback(operation: &'static str) -> &'static str {
        match operation {
            "transfer_create" => "Failed to initiate transfer",
            _ => "Failed to initialize transaction",
        }
    }
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
    async fn submit(&self, call: GatewayCall) -> GatewayOutcome {
        let operation = call.operation();
        let url = self.endpoint(&call);
        let body = Self::request_body(&call);

        let response = match self
            .http_client
            .post(&url)
            .bearer_auth(self.config.secret_key.expose_secret())
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let detail = if e.is_timeout() {
                    format!(
                        "request timed out after {}s",
                        self.config.request_timeout.as_secs()
                    )
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    e.to_string()
                };
                tracing::error!(operation, error = %detail, "Gateway unreachable");
                return GatewayOutcome::TransportFailed { detail };
            }
        };

        let status = response.status();
        match response.json::<PaystackEnvelope>().await {
            Ok(envelope) => Self::classify(operation, status, envelope),
            Err(e) => {
                tracing::error!(
                    operation,
                    http_status = status.as_u16(),
                    error = %e,
                    "Gateway response body could not be parsed"
                );
                GatewayOutcome::TransportFailed {
                    detail: format!("unparseable response body: {}", e),
                }
            }
        }
    }
}
