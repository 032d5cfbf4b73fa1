//! Session issuance.

use crate::domain::foundation::{PrincipalId, Timestamp, ValidationError};

use super::codec::TokenCodec;
use super::session::Session;

/// Default session validity window in days.
pub const DEFAULT_VALIDITY_DAYS: i64 = 5;

/// A freshly issued session together with its encoded token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Issues new sessions for authenticated principals.
///
/// Issuance is pure: the issuer computes the session window and encodes
/// the token. Sending the cookie is the HTTP layer's job.
#[derive(Clone)]
pub struct SessionIssuer {
    codec: TokenCodec,
    validity_days: i64,
}

impl SessionIssuer {
    /// Creates an issuer with the default five-day validity window.
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            codec,
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }

    /// Overrides the validity window. Values below one day are clamped
    /// up; the window must always be positive.
    pub fn with_validity_days(mut self, days: i64) -> Self {
        self.validity_days = days.max(1);
        self
    }

    /// Issues a session for the given principal identifier.
    ///
    /// Fails with a validation error naming `userId` when the identifier
    /// is empty.
    pub fn issue(&self, principal_id: &str) -> Result<IssuedSession, ValidationError> {
        self.issue_at(principal_id, Timestamp::now())
    }

    /// Issues a session as of an explicit instant.
    pub fn issue_at(
        &self,
        principal_id: &str,
        now: Timestamp,
    ) -> Result<IssuedSession, ValidationError> {
        let principal_id = PrincipalId::new(principal_id)?;
        let session = Session::new(principal_id, now, now.plus_days(self.validity_days))?;
        let token = self.codec.encode(&session);
        Ok(IssuedSession { token, session })
    }

    /// The validity window in whole seconds, as used for cookie Max-Age.
    pub fn validity_secs(&self) -> u64 {
        (self.validity_days * 24 * 60 * 60) as u64
    }
}
