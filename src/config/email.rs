//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (MailerSend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// MailerSend API token
    pub api_token: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Operator mailbox that receives new request submissions
    pub operator_email: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_token.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL_API_TOKEN"));
        }
        if !self.api_token.starts_with("mlsn_") {
            return Err(ValidationError::InvalidMailerSendToken);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.operator_email.contains('@') {
            return Err(ValidationError::InvalidOperatorEmail);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_base_url(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            operator_email: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.mailersend.com".to_string()
}

fn default_from_email() -> String {
    "noreply@cardvault.app".to_string()
}

fn default_from_name() -> String {
    "CardVault".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
