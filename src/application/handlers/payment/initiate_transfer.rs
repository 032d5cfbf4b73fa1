//! InitiateTransferHandler - Command handler for balance payouts.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::payment::{GatewayCall, GatewayOutcome, TransferInput};
use crate::ports::PaymentGateway;

/// Command carrying a raw transfer submission.
#[derive(Debug, Clone, Default)]
pub struct InitiateTransferCommand {
    pub input: TransferInput,
}

/// Result of a transfer attempt: the classified gateway outcome.
#[derive(Debug, Clone)]
pub struct InitiateTransferResult {
    pub outcome: GatewayOutcome,
}

/// Handler for creating balance-funded transfers.
pub struct InitiateTransferHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl InitiateTransferHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: InitiateTransferCommand,
    ) -> Result<InitiateTransferResult, ValidationError> {
        // 1. Normalize the submission; invalid input never reaches the gateway
        let order = cmd.input.normalize()?;

        // 2. One gateway call, classified into the closed outcome set
        let outcome = self.gateway.submit(GatewayCall::CreateTransfer(order)).await;

        Ok(InitiateTransferResult { outcome })
    }
}
