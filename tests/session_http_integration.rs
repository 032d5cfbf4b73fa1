//! Integration tests for the session HTTP lifecycle.
//!
//! These tests run requests through the fully assembled router and verify:
//! 1. Login issues a signed session cookie
//! 2. The cookie authenticates subsequent requests
//! 3. GET /api/me resolves the signed-in principal's profile
//! 4. Tampered and expired cookies are cleared and treated as anonymous
//!
//! Uses the in-memory profile directory; no network or external services.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use cardvault::adapters::email::MockMailTransport;
use cardvault::adapters::http::cookie::{SessionCookie, SESSION_COOKIE};
use cardvault::adapters::http::middleware::SessionAuthState;
use cardvault::adapters::http::notification::NotificationHandlers;
use cardvault::adapters::http::payment::PaymentHandlers;
use cardvault::adapters::http::session::SessionHandlers;
use cardvault::adapters::http::{app_router, AppState};
use cardvault::adapters::paystack::MockPaymentGateway;
use cardvault::adapters::profile::InMemoryProfileDirectory;
use cardvault::application::handlers::notification::DispatchNotificationHandler;
use cardvault::application::handlers::payment::{
    InitializeCheckoutHandler, InitiateTransferHandler,
};
use cardvault::application::handlers::session::{CreateSessionHandler, ResolveProfileHandler};
use cardvault::config::ServerConfig;
use cardvault::domain::foundation::Timestamp;
use cardvault::domain::session::{SessionIssuer, SessionValidator, TokenCodec};

// =============================================================================
// Test Infrastructure
// =============================================================================

const SIGNING_KEY: &str = "integration_test_signing_key";

/// Builds the full application router with in-memory collaborators.
///
/// The directory knows `user-1` as `ada`; every other principal misses.
fn test_app() -> Router {
    let codec = TokenCodec::new(SIGNING_KEY);
    let issuer = SessionIssuer::new(codec.clone());
    let cookie = SessionCookie::new(false, issuer.validity_secs());
    let directory = InMemoryProfileDirectory::new().with_profile("user-1", "ada");
    let gateway = Arc::new(MockPaymentGateway::new());

    let state = AppState {
        session_handlers: SessionHandlers::new(
            Arc::new(CreateSessionHandler::new(issuer)),
            Arc::new(ResolveProfileHandler::new(Arc::new(directory))),
            cookie.clone(),
        ),
        payment_handlers: PaymentHandlers::new(
            Arc::new(InitiateTransferHandler::new(gateway.clone())),
            Arc::new(InitializeCheckoutHandler::new(gateway)),
        ),
        notification_handlers: NotificationHandlers::new(Arc::new(
            DispatchNotificationHandler::new(
                Arc::new(MockMailTransport::new()),
                "requests@cardvault.test",
            ),
        )),
        auth: SessionAuthState {
            validator: Arc::new(SessionValidator::new(codec)),
            cookie,
        },
    };

    app_router(state, &ServerConfig::default())
}

async fn call(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn login_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/login-session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Logs in and returns the `session=<token>` pair for the Cookie header.
async fn login(app: &Router, user_id: &str) -> String {
    let response = call(app, login_request(json!({ "userId": user_id }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn get_me(app: &Router, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri("/api/me");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    call(app, builder.body(Body::empty()).unwrap()).await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn login_issues_a_session_cookie() {
    let app = test_app();

    let response = call(&app, login_request(json!({ "userId": "user-1" }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let body = body_json(response).await;

    assert_eq!(body, json!({ "status": "success" }));
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=432000"));
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn login_without_user_id_is_rejected_without_a_cookie() {
    let app = test_app();

    let response = call(&app, login_request(json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "No userId provided" }));
}

#[tokio::test]
async fn issued_cookie_resolves_the_profile_on_me() {
    let app = test_app();
    let cookie = login(&app, "user-1").await;

    let response = get_me(&app, Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "user": { "id": "user-1", "username": "ada" } }));
}

#[tokio::test]
async fn unlisted_principals_fall_back_to_unknown() {
    let app = test_app();
    let cookie = login(&app, "user-9").await;

    let response = get_me(&app, Some(cookie.as_str())).await;

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "user": { "id": "user-9", "username": "Unknown" } })
    );
}

#[tokio::test]
async fn me_is_anonymous_without_a_cookie() {
    let app = test_app();

    let response = get_me(&app, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = body_json(response).await;
    assert_eq!(body, json!({ "user": null }));
}

#[tokio::test]
async fn tampered_cookie_is_cleared_and_anonymous() {
    let app = test_app();
    let cookie = login(&app, "user-1").await;
    let tampered = format!("{}AAAA", cookie);

    let response = get_me(&app, Some(tampered.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("session=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body, json!({ "user": null }));
}

#[tokio::test]
async fn expired_session_is_cleared_and_anonymous() {
    let app = test_app();

    // Signed with the right key, but the window closed decades ago.
    let issued = SessionIssuer::new(TokenCodec::new(SIGNING_KEY))
        .issue_at("user-1", Timestamp::from_unix_secs(1_000_000))
        .unwrap();
    let cookie = format!("{}={}", SESSION_COOKIE, issued.token);

    let response = get_me(&app, Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body, json!({ "user": null }));
}

#[tokio::test]
async fn cookie_signed_with_a_different_key_is_rejected() {
    let app = test_app();

    let issued = SessionIssuer::new(TokenCodec::new("some_other_key"))
        .issue("user-1")
        .unwrap();
    let cookie = format!("{}={}", SESSION_COOKIE, issued.token);

    let response = get_me(&app, Some(cookie.as_str())).await;

    let body = body_json(response).await;
    assert_eq!(body, json!({ "user": null }));
}
