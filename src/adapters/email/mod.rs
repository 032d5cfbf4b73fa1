//! MailerSend mail transport adapter.
//!
//! Implements the `MailTransport` port over MailerSend's HTTP API, plus a
//! recording mock for tests.

mod mailersend;
mod mock_transport;

pub use mailersend::{MailerSendConfig, MailerSendTransport};
pub use mock_transport::MockMailTransport;
