//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::cookie::SessionCookie;
use crate::adapters::http::middleware::OptionalPrincipal;
use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, ResolveProfileHandler, ResolveProfileQuery,
};

use super::dto::{CurrentUserResponse, ErrorResponse, LoginRequest, LoginResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    profile_handler: Arc<ResolveProfileHandler>,
    cookie: SessionCookie,
}

impl SessionHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        profile_handler: Arc<ResolveProfileHandler>,
        cookie: SessionCookie,
    ) -> Self {
        Self {
            create_handler,
            profile_handler,
            cookie,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/login-session - Open a session after identity provider login
pub async fn login_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = CreateSessionCommand {
        user_id: req.user_id,
    };

    let result = match handlers.create_handler.handle(cmd) {
        Ok(result) => result,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No userId provided")),
            )
                .into_response()
        }
    };

    let header = match HeaderValue::from_str(&handlers.cookie.issue(&result.token)) {
        Ok(header) => header,
        Err(e) => {
            tracing::error!(error = %e, "Session cookie header failed to encode");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            )
                .into_response();
        }
    };

    tracing::info!(principal = %result.session.principal_id(), "Session opened");

    let mut response = (StatusCode::OK, Json(LoginResponse::success())).into_response();
    response.headers_mut().insert(SET_COOKIE, header);
    response
}

/// GET /api/me - The signed-in user, or null
pub async fn current_user(
    State(handlers): State<SessionHandlers>,
    OptionalPrincipal(principal): OptionalPrincipal,
) -> Response {
    let principal = match principal {
        Some(principal) => principal,
        None => {
            return (StatusCode::OK, Json(CurrentUserResponse::anonymous())).into_response();
        }
    };

    let query = ResolveProfileQuery {
        principal_id: principal.principal_id,
    };

    let body = match handlers.profile_handler.handle(query).await {
        Some(profile) => CurrentUserResponse::signed_in(profile),
        None => CurrentUserResponse::anonymous(),
    };

    (StatusCode::OK, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::profile::InMemoryProfileDirectory;
    use crate::domain::foundation::PrincipalId;
    use crate::domain::session::{PrincipalContext, SessionIssuer, TokenCodec};

    fn handlers() -> SessionHandlers {
        let issuer = SessionIssuer::new(TokenCodec::new("session_handler_test_key"));
        SessionHandlers::new(
            Arc::new(CreateSessionHandler::new(issuer)),
            Arc::new(ResolveProfileHandler::new(Arc::new(
                InMemoryProfileDirectory::new().with_profile("user-1", "ada"),
            ))),
            SessionCookie::new(false, 432_000),
        )
    }

    #[tokio::test]
    async fn login_without_user_id_is_a_400() {
        let response = login_session(State(handlers()), Json(LoginRequest::default())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn login_sets_the_session_cookie() {
        let req = LoginRequest {
            user_id: Some("user-1".to_string()),
        };
        let response = login_session(State(handlers()), Json(req)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("Max-Age=432000"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn current_user_is_null_for_anonymous() {
        let response = current_user(State(handlers()), OptionalPrincipal(None)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn current_user_resolves_the_principal() {
        let principal = PrincipalContext {
            principal_id: PrincipalId::new("user-1").unwrap(),
        };
        let response = current_user(State(handlers()), OptionalPrincipal(Some(principal))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
