//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `router` assembles them into the complete application surface.

pub mod cookie;
pub mod middleware;
pub mod notification;
pub mod payment;
pub mod router;
pub mod session;

// Re-export key types for convenience
pub use cookie::{SessionCookie, SESSION_COOKIE};
pub use router::{app_router, AppState};
