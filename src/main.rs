//! CardVault server binary.
//!
//! Loads configuration, wires the adapters to the application handlers,
//! and serves the HTTP API until interrupted.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cardvault::adapters::email::{MailerSendConfig, MailerSendTransport};
use cardvault::adapters::http::cookie::SessionCookie;
use cardvault::adapters::http::middleware::SessionAuthState;
use cardvault::adapters::http::notification::NotificationHandlers;
use cardvault::adapters::http::payment::PaymentHandlers;
use cardvault::adapters::http::session::SessionHandlers;
use cardvault::adapters::http::{app_router, AppState};
use cardvault::adapters::paystack::{PaystackConfig, PaystackGateway};
use cardvault::adapters::profile::InMemoryProfileDirectory;
use cardvault::application::handlers::notification::DispatchNotificationHandler;
use cardvault::application::handlers::payment::{
    InitializeCheckoutHandler, InitiateTransferHandler,
};
use cardvault::application::handlers::session::{CreateSessionHandler, ResolveProfileHandler};
use cardvault::config::AppConfig;
use cardvault::domain::session::{SessionIssuer, SessionValidator, TokenCodec};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("ERROR: Invalid configuration: {e}");
        std::process::exit(1);
    }

    init_tracing(&config);

    let state = build_state(&config);
    let app = app_router(state, &config.server);

    let addr = config.server.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("ERROR: Failed to bind to {addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "CardVault listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("ERROR: Server error: {e}");
        std::process::exit(1);
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter; production emits JSON
/// lines for the log pipeline.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wires adapters into the handler graph.
fn build_state(config: &AppConfig) -> AppState {
    let codec = TokenCodec::new(config.session.signing_key.as_str());
    let issuer =
        SessionIssuer::new(codec.clone()).with_validity_days(config.session.validity_days);
    let cookie = SessionCookie::new(config.is_production(), issuer.validity_secs());
    let validator = Arc::new(SessionValidator::new(codec));

    let gateway = Arc::new(PaystackGateway::new(PaystackConfig::from_app_config(
        &config.gateway,
    )));
    let transport = Arc::new(MailerSendTransport::new(MailerSendConfig::from_app_config(
        &config.email,
    )));
    let profiles = Arc::new(InMemoryProfileDirectory::new());

    AppState {
        session_handlers: SessionHandlers::new(
            Arc::new(CreateSessionHandler::new(issuer)),
            Arc::new(ResolveProfileHandler::new(profiles)),
            cookie.clone(),
        ),
        payment_handlers: PaymentHandlers::new(
            Arc::new(InitiateTransferHandler::new(gateway.clone())),
            Arc::new(InitializeCheckoutHandler::new(gateway)),
        ),
        notification_handlers: NotificationHandlers::new(Arc::new(
            DispatchNotificationHandler::new(transport, config.email.operator_email.clone()),
        )),
        auth: SessionAuthState { validator, cookie },
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutting down");
}
