//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Ports
//!
//! - `PaymentGateway` - Single entry point for gateway calls
//! - `MailTransport` - Delivery of composed notification mails
//! - `ProfileReader` - Read-only shopper profile lookup

mod mail_transport;
mod payment_gateway;
mod profile_reader;

pub use mail_transport::{MailTransport, MailTransportError, OutboundEmail};
pub use payment_gateway::PaymentGateway;
pub use profile_reader::{Profile, ProfileError, ProfileReader};
