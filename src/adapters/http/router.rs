//! Top-level application router.
//!
//! Assembles the per-domain routers under `/api`, installs the session
//! middleware, and stacks the transport-level layers (trace, CORS,
//! timeout). Handlers never see raw cookies; the middleware turns them
//! into request extensions before any route runs.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, routing::get, Json, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::middleware::{session_middleware, SessionAuthState};
use super::notification::{notification_routes, NotificationHandlers};
use super::payment::{payment_routes, PaymentHandlers};
use super::session::{session_routes, SessionHandlers};

/// Everything the HTTP surface needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub session_handlers: SessionHandlers,
    pub payment_handlers: PaymentHandlers,
    pub notification_handlers: NotificationHandlers,
    pub auth: SessionAuthState,
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assembles the complete application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(session_routes(state.session_handlers))
        .merge(payment_routes(state.payment_handlers))
        .merge(notification_routes(state.notification_handlers));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(
            state.auth,
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
}

/// Builds the CORS layer from configuration.
///
/// With no configured origins the layer is permissive, which suits local
/// development. Configured origins get exact matching plus credentials,
/// which the session cookie needs cross-origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
