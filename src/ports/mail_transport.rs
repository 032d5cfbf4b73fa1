//! Mail transport port.
//!
//! Defines the contract for sending notification mails. The dispatcher
//! builds the complete message (recipient, subject, body); the transport
//! only delivers it.
//!
//! # Design
//!
//! - **Fire once**: one delivery attempt per send, no retry loop.
//! - **Opaque failure**: callers only learn that delivery failed; the
//!   transport keeps provider detail in its own logs.

use async_trait::async_trait;
use thiserror::Error;

/// A fully composed outbound mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Why a delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailTransportError {
    /// The mail service answered with an error status.
    #[error("mail service rejected the message (status {status})")]
    Rejected { status: u16 },

    /// The mail service could not be reached.
    #[error("mail service unreachable: {0}")]
    Unreachable(String),
}

/// Port for the outbound mail service.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one mail. Exactly one attempt.
    async fn send(&self, email: OutboundEmail) -> Result<(), MailTransportError>;
}
