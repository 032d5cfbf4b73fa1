//! HTTP handlers for notification endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequirePrincipal;
use crate::application::handlers::notification::{DispatchError, DispatchNotificationHandler};

use super::dto::{NotificationRequest, NotificationResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct NotificationHandlers {
    dispatch_handler: Arc<DispatchNotificationHandler>,
}

impl NotificationHandlers {
    pub fn new(dispatch_handler: Arc<DispatchNotificationHandler>) -> Self {
        Self { dispatch_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/send-notifications - Send a gift card request notification mail
pub async fn send_notification(
    State(handlers): State<NotificationHandlers>,
    _principal: RequirePrincipal,
    Json(req): Json<NotificationRequest>,
) -> Response {
    match handlers.dispatch_handler.handle(req.into()).await {
        Ok(result) => {
            tracing::info!(recipient = %result.recipient, subject = result.subject, "Notification dispatched");
            (StatusCode::OK, Json(NotificationResponse::sent())).into_response()
        }
        Err(e) => handle_dispatch_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dispatch_error(error: DispatchError) -> Response {
    match error {
        DispatchError::Invalid(_) => (
            StatusCode::BAD_REQUEST,
            Json(NotificationResponse::invalid_type()),
        )
            .into_response(),
        DispatchError::Delivery(e) => {
            tracing::error!(error = %e, "Notification mail failed to send");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(NotificationResponse::failed()),
            )
                .into_response()
        }
    }
}
