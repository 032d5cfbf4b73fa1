//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Pre-configured outcomes (fixed or queued in sequence)
//! - Rejection and transport-failure injection
//! - Call tracking

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::payment::{GatewayCall, GatewayOutcome};
use crate::ports::PaymentGateway;

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.enqueue(GatewayOutcome::Rejected { status: 400, message: "declined".into() });
///
/// let outcome = mock.submit(call).await;
/// assert_eq!(mock.call_count("transfer_create"), 1);
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Outcomes returned in order; when empty, a default success is built.
    queued: VecDeque<GatewayOutcome>,

    /// Outcome returned for every call when no queue entry applies.
    fixed: Option<GatewayOutcome>,

    /// Every call received, in order.
    call_log: Vec<GatewayCall>,
}

impl MockPaymentGateway {
    /// Create a new mock gateway that answers every call with success.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every call with the given status and message.
    pub fn rejecting(status: u16, message: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.respond_with(GatewayOutcome::Rejected {
            status,
            message: message.into(),
        });
        mock
    }

    /// Create a mock that fails every call at the transport layer.
    pub fn unreachable() -> Self {
        let mock = Self::new();
        mock.respond_with(GatewayOutcome::TransportFailed {
            detail: "mock transport failure".to_string(),
        });
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the outcome returned for every subsequent call.
    pub fn respond_with(&self, outcome: GatewayOutcome) {
        self.inner.lock().unwrap().fixed = Some(outcome);
    }

    /// Queue an outcome for a single call; queued outcomes win over the
    /// fixed response and are consumed in order.
    pub fn enqueue(&self, outcome: GatewayOutcome) {
        self.inner.lock().unwrap().queued.push_back(outcome);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Check if an operation was called.
    pub fn was_called(&self, operation: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.operation() == operation)
    }

    /// Get count of calls to an operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().call_log.clear();
    }

    /// Default success payload shaped like the real gateway's response.
    fn default_success(call: &GatewayCall) -> GatewayOutcome {
        let data = match call {
            GatewayCall::InitializeTransaction(_) => json!({
                "authorization_url": "https://checkout.paystack.com/mock",
                "access_code": "mock_access_code",
                "reference": "mock_reference",
            }),
            GatewayCall::CreateTransfer(_) => json!({
                "transfer_code": "TRF_mock",
                "status": "pending",
            }),
        };
        GatewayOutcome::Success { data }
    }
}

impl Clone for MockPaymentGateway {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn submit(&self, call: GatewayCall) -> GatewayOutcome {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(call.clone());

        if let Some(outcome) = state.queued.pop_front() {
            return outcome;
        }
        if let Some(outcome) = &state.fixed {
            return outcome.clone();
        }
        Self::default_success(&call)
    }
}
