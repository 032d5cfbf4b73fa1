//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `paystack` - Payment gateway client (plus a mock for tests)
//! - `email` - MailerSend notification transport (plus a mock)
//! - `profile` - Shopper profile lookup
//! - `http` - REST API surface

pub mod email;
pub mod http;
pub mod paystack;
pub mod profile;
