//! InitializeCheckoutHandler - Command handler for hosted checkout setup.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::payment::{CheckoutInput, GatewayCall, GatewayOutcome};
use crate::ports::PaymentGateway;

/// Command carrying a raw checkout submission.
#[derive(Debug, Clone, Default)]
pub struct InitializeCheckoutCommand {
    pub input: CheckoutInput,
}

/// Result of a checkout attempt: the classified gateway outcome.
#[derive(Debug, Clone)]
pub struct InitializeCheckoutResult {
    pub outcome: GatewayOutcome,
}

/// Handler for initializing hosted checkout pages.
pub struct InitializeCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl InitializeCheckoutHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: InitializeCheckoutCommand,
    ) -> Result<InitializeCheckoutResult, ValidationError> {
        // 1. Normalize the submission; invalid input never reaches the gateway
        let order = cmd.input.normalize()?;

        // 2. One gateway call, classified into the closed outcome set
        let outcome = self
            .gateway
            .submit(GatewayCall::InitializeTransaction(order))
            .await;

        Ok(InitializeCheckoutResult { outcome })
    }
}
