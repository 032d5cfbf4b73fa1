//! HTTP routes for payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{initialize_checkout, initiate_transfer, PaymentHandlers};

/// Creates the payment router with all endpoints.
pub fn payment_routes(handlers: PaymentHandlers) -> Router {
    Router::new()
        .route("/initiate-transfer", post(initiate_transfer))
        .route("/pay-stack", post(initialize_checkout))
        .with_state(handlers)
}
