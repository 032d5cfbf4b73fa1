//! Payment gateway port.
//!
//! Defines the contract for the external payment processor integration
//! (Paystack in production). Both payment operations, hosted checkout
//! initialization and balance transfers, go through the single `submit`
//! entry point.
//!
//! # Design
//!
//! - **One call per invocation**: implementations perform exactly one
//!   outbound request and never retry on their own.
//! - **Closed outcome**: every invocation classifies into the
//!   [`GatewayOutcome`] sum type, so callers must handle acceptance,
//!   rejection, and transport failure explicitly.
//! - **Bounded**: implementations carry their own request timeout; a
//!   timeout classifies as transport failure.

use async_trait::async_trait;

use crate::domain::payment::{GatewayCall, GatewayOutcome};

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submits one gateway call and classifies the result.
    ///
    /// Never fails at the type level: unreachable gateways and garbage
    /// responses come back as [`GatewayOutcome::TransportFailed`], with
    /// the detail kept out of anything client-facing.
    async fn submit(&self, call: GatewayCall) -> GatewayOutcome;
}
