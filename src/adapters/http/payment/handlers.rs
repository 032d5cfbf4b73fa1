//! HTTP handlers for payment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequirePrincipal;
use crate::application::handlers::payment::{
    InitializeCheckoutCommand, InitializeCheckoutHandler, InitiateTransferCommand,
    InitiateTransferHandler,
};
use crate::domain::payment::GatewayOutcome;

use super::dto::{CheckoutRequest, DataResponse, ErrorResponse, TransferRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PaymentHandlers {
    transfer_handler: Arc<InitiateTransferHandler>,
    checkout_handler: Arc<InitializeCheckoutHandler>,
}

impl PaymentHandlers {
    pub fn new(
        transfer_handler: Arc<InitiateTransferHandler>,
        checkout_handler: Arc<InitializeCheckoutHandler>,
    ) -> Self {
        Self {
            transfer_handler,
            checkout_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/initiate-transfer - Pay out a shopper from the gateway balance
pub async fn initiate_transfer(
    State(handlers): State<PaymentHandlers>,
    _principal: RequirePrincipal,
    Json(req): Json<TransferRequest>,
) -> Response {
    let cmd = InitiateTransferCommand { input: req.into() };

    match handlers.transfer_handler.handle(cmd).await {
        Ok(result) => gateway_outcome_response(result.outcome),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

/// POST /api/pay-stack - Initialize a hosted checkout for a card purchase
pub async fn initialize_checkout(
    State(handlers): State<PaymentHandlers>,
    _principal: RequirePrincipal,
    Json(req): Json<CheckoutRequest>,
) -> Response {
    let cmd = InitializeCheckoutCommand { input: req.into() };

    match handlers.checkout_handler.handle(cmd).await {
        Ok(result) => gateway_outcome_response(result.outcome),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Outcome mapping
// ════════════════════════════════════════════════════════════════════════════

/// Maps a classified gateway outcome onto the wire contract.
///
/// Success passes the upstream payload through under `data`. Rejections
/// relay the upstream status and message. Transport failures collapse to
/// a plain 500; their detail lives in the gateway adapter's logs only.
fn gateway_outcome_response(outcome: GatewayOutcome) -> Response {
    match outcome {
        GatewayOutcome::Success { data } => {
            (StatusCode::OK, Json(DataResponse { data })).into_response()
        }
        GatewayOutcome::Rejected { status, message } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(ErrorResponse::new(message))).into_response()
        }
        GatewayOutcome::TransportFailed { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Internal Server Error")),
        )
            .into_response(),
    }
}
