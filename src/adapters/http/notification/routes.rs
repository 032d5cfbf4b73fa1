//! HTTP routes for notification endpoints.

use axum::{routing::post, Router};

use super::handlers::{send_notification, NotificationHandlers};

/// Creates the notification router with all endpoints.
pub fn notification_routes(handlers: NotificationHandlers) -> Router {
    Router::new()
        .route("/send-notifications", post(send_notification))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::MockMailTransport;
    use crate::application::handlers::notification::DispatchNotificationHandler;
    use crate::domain::foundation::PrincipalId;
    use crate::domain::session::PrincipalContext;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(transport: Arc<MockMailTransport>) -> Router {
        let handler = DispatchNotificationHandler::new(transport, "requests@cardvault.test");
        notification_routes(NotificationHandlers::new(Arc::new(handler)))
    }

    fn principal() -> PrincipalContext {
        PrincipalContext {
            principal_id: PrincipalId::new("user-1").unwrap(),
        }
    }

    #[tokio::test]
    async fn send_requires_a_principal() {
        let response = app(Arc::new(MockMailTransport::new()))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-notifications")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"type": "submission"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn authorized_submission_dispatches_mail() {
        let transport = Arc::new(MockMailTransport::new());
        let response = app(transport.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-notifications")
                    .header("content-type", "application/json")
                    .extension(principal())
                    .body(Body::from(
                        r#"{"type": "submission", "category": "Gaming", "userEmail": "s@example.com"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(transport.sent_count(), 1);
    }

    #[tokio::test]
    async fn unknown_type_is_a_400_without_any_send() {
        let transport = Arc::new(MockMailTransport::new());
        let response = app(transport.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-notifications")
                    .header("content-type", "application/json")
                    .extension(principal())
                    .body(Body::from(r#"{"type": "payment-made"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(transport.sent_count(), 0);
    }
}
