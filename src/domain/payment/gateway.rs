//! Gateway orchestration contract types.
//!
//! Transfer and checkout are two instantiations of the same contract:
//! one outbound call, one classified outcome. The call names the
//! operation, the outcome is a closed sum the caller must match
//! exhaustively, so no failure mode can be ignored by accident.

use serde_json::Value;

use super::request::{CheckoutOrder, TransferOrder};

/// One invocation of the payment gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    /// Initialize a hosted checkout for a card purchase.
    InitializeTransaction(CheckoutOrder),
    /// Create a balance-funded transfer to a saved recipient.
    CreateTransfer(TransferOrder),
}

impl GatewayCall {
    /// Stable operation label for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            GatewayCall::InitializeTransaction(_) => "transaction_initialize",
            GatewayCall::CreateTransfer(_) => "transfer_create",
        }
    }
}

/// Classified result of a gateway invocation.
///
/// Produced exactly once per call; this layer never retries.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayOutcome {
    /// The gateway accepted the call; `data` is its response payload.
    Success { data: Value },

    /// The gateway answered with a non-2xx status and a message.
    ///
    /// Propagated to the caller with the upstream status, never masked
    /// as an internal error.
    Rejected { status: u16, message: String },

    /// The gateway could not be reached, timed out, or returned an
    /// unparseable body. `detail` is for logs only and must never be
    /// shown to clients.
    TransportFailed { detail: String },
}

impl GatewayOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GatewayOutcome::Success { .. })
    }
}
