//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Payment gateway configuration (Paystack)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Paystack secret key
    pub secret_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Check if using Paystack test mode
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Check if using Paystack live mode
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_")
    }

    /// Validate gateway configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_SECRET_KEY"));
        }

        // Verify key prefix for safety
        if !self.secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidGatewayKey);
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }

        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::GatewayUrlMustBeHttps);
        }

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.paystack.co".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
