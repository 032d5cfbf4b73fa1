//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CurrentUserResponse, ErrorResponse, LoginRequest, LoginResponse, UserResponse};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
