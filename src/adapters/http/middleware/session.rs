//! Session middleware and principal extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that validates the session cookie and injects the principal into extensions
//! - `RequirePrincipal` - Extractor that requires an authenticated principal
//! - `OptionalPrincipal` - Extractor for optionally authenticated routes
//!
//! # Architecture
//!
//! The middleware runs on every request. It never rejects a request on
//! its own: a bad cookie downgrades the request to anonymous and the
//! response picks up a removal `Set-Cookie`, while route-level policy is
//! enforced by the extractors.
//!
//! ```text
//! Request → session_middleware → injects PrincipalContext into extensions
//!                                         ↓
//!                                 Handler → RequirePrincipal reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::session::{PrincipalContext, SessionValidator, SessionVerdict};

use super::super::cookie::SessionCookie;

/// Session middleware state - validator plus the cookie policy.
#[derive(Clone)]
pub struct SessionAuthState {
    pub validator: Arc<SessionValidator>,
    pub cookie: SessionCookie,
}

/// Session middleware that authenticates requests from the session cookie.
///
/// This middleware:
/// 1. Extracts the `session` cookie, if one was sent
/// 2. Validates it with the domain `SessionValidator`
/// 3. On a valid session, injects `PrincipalContext` into request extensions
/// 4. On no cookie, continues anonymously
/// 5. On a malformed or expired cookie, continues anonymously and appends
///    a removal `Set-Cookie` to the response
pub async fn session_middleware(
    State(state): State<SessionAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = SessionCookie::extract(request.headers());
    let verdict = state.validator.validate(token.as_deref());

    if let SessionVerdict::Rejected(reason) = &verdict {
        tracing::debug!(reason = ?reason, "Discarding unusable session cookie");
    }
    let remove_cookie = verdict.requires_cookie_removal();

    if let Some(principal) = verdict.principal() {
        request.extensions_mut().insert(principal.clone());
    }

    let mut response = next.run(request).await;

    // The removal instruction rides on whatever the handler answered.
    if remove_cookie {
        if let Ok(value) = HeaderValue::from_str(&state.cookie.removal()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

/// Extractor that requires an authenticated principal.
///
/// Use this in handlers that must not serve anonymous requests. If the
/// middleware did not establish a principal, the request is rejected
/// with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub PrincipalContext);

impl<S> axum::extract::FromRequestParts<S> for RequirePrincipal
where
    S: Send + Sync,
{
    type Rejection = PrincipalRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<PrincipalContext>()
                .cloned()
                .map(RequirePrincipal)
                .ok_or(PrincipalRejection::Unauthenticated)
        })
    }
}

/// Extractor for optional authentication.
///
/// Returns `None` for anonymous requests and `Some(principal)` when the
/// session cookie checked out.
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(pub Option<PrincipalContext>);

impl<S> axum::extract::FromRequestParts<S> for OptionalPrincipal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let principal = parts.extensions.get::<PrincipalContext>().cloned();
            Ok(OptionalPrincipal(principal))
        })
    }
}

/// Rejection type for unauthenticated requests.
#[derive(Debug, Clone)]
pub enum PrincipalRejection {
    /// No valid session cookie accompanied the request.
    Unauthenticated,
}

impl IntoResponse for PrincipalRejection {
    fn into_response(self) -> Response {
        let message = match self {
            PrincipalRejection::Unauthenticated => "Authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response()
    }
}
