//! MailerSend mail transport adapter.
//!
//! Implements the `MailTransport` port against MailerSend's HTTP API
//! (`POST /v1/email`). One request per delivery, no retry.
//!
//! # Security
//!
//! - The API token is held in `secrecy::SecretString` and only ever leaves
//!   as the bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::config::EmailConfig;
use crate::ports::{MailTransport, MailTransportError, OutboundEmail};

/// MailerSend API configuration.
#[derive(Clone)]
pub struct MailerSendConfig {
    /// MailerSend API token (mlsn_...).
    api_token: SecretString,

    /// Base URL for the MailerSend API (default: https://api.mailersend.com).
    base_url: String,

    /// Sender address, must belong to a verified MailerSend domain.
    from_email: String,

    /// Display name shown alongside the sender address.
    from_name: String,

    /// Timeout applied to each outbound request.
    request_timeout: Duration,
}

impl MailerSendConfig {
    /// Create a new configuration with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::new(api_token.into()),
            base_url: "https://api.mailersend.com".to_string(),
            from_email: "noreply@cardvault.app".to_string(),
            from_name: "CardVault".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Build adapter configuration from the application email section.
    pub fn from_app_config(config: &EmailConfig) -> Self {
        Self {
            api_token: SecretString::new(config.api_token.clone()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the sender address and display name.
    pub fn with_sender(mut self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.from_email = email.into();
        self.from_name = name.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// MailerSend transport adapter.
pub struct MailerSendTransport {
    config: MailerSendConfig,
    http_client: Client,
}

impl MailerSendTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: MailerSendConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Builds the email endpoint URL.
    fn email_url(&self) -> String {
        format!("{}/v1/email", self.config.base_url)
    }

    /// Wire payload for one delivery.
    fn request_body(&self, email: &OutboundEmail) -> serde_json::Value {
        json!({
            "from": {
                "email": self.config.from_email,
                "name": self.config.from_name,
            },
            "to": [{ "email": email.to }],
            "subject": email.subject,
            "text": email.body,
        })
    }
}

#[async_trait]
impl MailTransport for MailerSendTransport {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailTransportError> {
        let body = self.request_body(&email);

        let response = self
            .http_client
            .post(self.email_url())
            .bearer_auth(self.config.api_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
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
                tracing::error!(error = %detail, "Mail service unreachable");
                MailTransportError::Unreachable(detail)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(
                http_status = status.as_u16(),
                error = %error_body,
                "Mail service rejected the message"
            );
            return Err(MailTransportError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(subject = %email.subject, "Notification mail accepted for delivery");
        Ok(())
    }
}
