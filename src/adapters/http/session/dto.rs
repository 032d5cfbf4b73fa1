//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::ports::Profile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a login session.
///
/// `userId` stays optional at the wire level; presence is checked by the
/// command handler so every caller gets the same error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body returned on successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub status: String,
}

impl LoginResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// The signed-in user as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

impl From<Profile> for UserResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
        }
    }
}

/// Response for the current-user lookup. `user` is `null` for anonymous
/// requests and for lookups the profile store could not serve.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<UserResponse>,
}

impl CurrentUserResponse {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(profile: Profile) -> Self {
        Self {
            user: Some(profile.into()),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
