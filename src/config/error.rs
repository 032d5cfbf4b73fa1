//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session signing key must be at least 32 bytes in production")]
    SigningKeyTooShort,

    #[error("Session validity window must be between 1 and 365 days")]
    InvalidValidityWindow,

    #[error("Invalid Paystack secret key format")]
    InvalidGatewayKey,

    #[error("Gateway base URL must use HTTPS in production")]
    GatewayUrlMustBeHttps,

    #[error("Invalid MailerSend API token format")]
    InvalidMailerSendToken,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid operator email address")]
    InvalidOperatorEmail,
}
