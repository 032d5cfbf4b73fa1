//! Paystack payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Paystack integration, covering:
//! - Transaction initialization (hosted checkout)
//! - Balance-funded transfers (payouts)
//!
//! # Security
//!
//! - The secret key travels only as the bearer credential, wrapped in
//!   `secrecy::SecretString` everywhere else
//! - Upstream rejection messages are relayed; transport details are logged
//!   and never shown to clients

mod gateway;
mod mock_gateway;

pub use gateway::{PaystackConfig, PaystackGateway};
pub use mock_gateway::MockPaymentGateway;
