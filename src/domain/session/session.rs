//! Session entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PrincipalId, Timestamp, ValidationError};

/// A client-held session: who is logged in and for how long.
///
/// Sessions are never persisted server-side. The signed, encoded form
/// produced by [`super::TokenCodec`] lives in the session cookie and is
/// the only record of the session's existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    principal_id: PrincipalId,
    issued_at: Timestamp,
    expires_at: Timestamp,
}

impl Session {
    /// Creates a session, enforcing that the expiry lies strictly after
    /// the issuance instant.
    pub fn new(
        principal_id: PrincipalId,
        issued_at: Timestamp,
        expires_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if !expires_at.is_after(&issued_at) {
            return Err(ValidationError::invalid_format(
                "expiresAt",
                "must be after issuedAt",
            ));
        }
        Ok(Self {
            principal_id,
            issued_at,
            expires_at,
        })
    }

    pub fn principal_id(&self) -> &PrincipalId {
        &self.principal_id
    }

    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// A session is expired once the expiry instant is no longer in the
    /// future relative to `now` (the instant itself counts as expired).
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !self.expires_at.is_after(&now)
    }
}
