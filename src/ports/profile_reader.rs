//! Profile reader port.
//!
//! Read-only lookup of shopper profiles kept in an external store. This
//! service only consumes the lookup result; profile storage itself lives
//! elsewhere.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::PrincipalId;

/// A shopper profile as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub username: String,
}

impl Profile {
    /// The fallback presented when a principal has no stored profile.
    pub fn unknown(principal_id: &PrincipalId) -> Self {
        Self {
            id: principal_id.as_str().to_string(),
            username: "Unknown".to_string(),
        }
    }
}

/// Why a profile lookup failed (distinct from "no profile exists").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the external profile store.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Fetches the profile for a principal.
    ///
    /// Returns `Ok(None)` when no profile exists; that is an expected
    /// case, not an error.
    async fn fetch(&self, principal_id: &PrincipalId) -> Result<Option<Profile>, ProfileError>;
}
