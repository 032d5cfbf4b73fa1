//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{current_user, login_session, SessionHandlers};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/login-session", post(login_session))
        .route("/me", get(current_user))
        .with_state(handlers)
}
