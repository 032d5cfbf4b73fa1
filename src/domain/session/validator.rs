//! Session validation: turning a raw cookie value into a request verdict.

use crate::domain::foundation::{PrincipalId, Timestamp};

use super::codec::{DecodeError, TokenCodec};

/// Request-scoped authentication result. Read-only once established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    pub principal_id: PrincipalId,
}

/// Why a presented cookie was rejected. Logged, never surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The cookie did not decode to a session.
    Malformed,
    /// The session decoded but its expiry has passed.
    Expired,
}

/// Outcome of validating the session cookie for one request.
///
/// Three internal states collapse to two observable ones: a request is
/// either authenticated or anonymous. `Rejected` is anonymous plus an
/// instruction to the transport layer to delete the unusable cookie; the
/// validator itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionVerdict {
    /// Valid session: the request proceeds with this principal.
    Authenticated(PrincipalContext),
    /// No cookie was presented.
    Anonymous,
    /// A cookie was presented but is unusable and should be deleted.
    Rejected(RejectReason),
}

impl SessionVerdict {
    /// The authenticated principal, if any.
    pub fn principal(&self) -> Option<&PrincipalContext> {
        match self {
            SessionVerdict::Authenticated(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Whether the transport layer should instruct the client to delete
    /// its session cookie.
    pub fn requires_cookie_removal(&self) -> bool {
        matches!(self, SessionVerdict::Rejected(_))
    }
}

/// Validates raw session cookie values.
#[derive(Clone)]
pub struct SessionValidator {
    codec: TokenCodec,
}

impl SessionValidator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Validates the cookie value, if one was presented, against the
    /// current clock.
    pub fn validate(&self, cookie: Option<&str>) -> SessionVerdict {
        self.validate_at(cookie, Timestamp::now())
    }

    /// Validates against an explicit instant.
    ///
    /// An absent cookie is an ordinary anonymous request, not an error.
    /// An undecodable or expired cookie downgrades the request to
    /// anonymous and flags the cookie for deletion.
    pub fn validate_at(&self, cookie: Option<&str>, now: Timestamp) -> SessionVerdict {
        let raw = match cookie {
            Some(raw) => raw,
            None => return SessionVerdict::Anonymous,
        };

        let session = match self.codec.decode(raw) {
            Ok(session) => session,
            Err(DecodeError::Malformed | DecodeError::BadSignature | DecodeError::InvalidClaims(_)) => {
                return SessionVerdict::Rejected(RejectReason::Malformed);
            }
        };

        if session.is_expired_at(now) {
            return SessionVerdict::Rejected(RejectReason::Expired);
        }

        SessionVerdict::Authenticated(PrincipalContext {
            principal_id: session.principal_id().clone(),
        })
    }
}
