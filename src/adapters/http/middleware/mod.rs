//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Session cookie middleware and principal extractors

pub mod session;

pub use session::{
    session_middleware, OptionalPrincipal, PrincipalRejection, RequirePrincipal, SessionAuthState,
};
