//! CreateSessionHandler - Command handler for opening login sessions.

use crate::domain::foundation::ValidationError;
use crate::domain::session::{IssuedSession, Session, SessionIssuer};

/// Command to open a session for a signed-in principal.
///
/// The identifier is optional because clients may omit it; presence is
/// checked here, not at the HTTP boundary.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionCommand {
    pub user_id: Option<String>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub token: String,
    pub session: Session,
}

/// Handler for opening sessions.
pub struct CreateSessionHandler {
    issuer: SessionIssuer,
}

impl CreateSessionHandler {
    pub fn new(issuer: SessionIssuer) -> Self {
        Self { issuer }
    }

    pub fn handle(&self, cmd: CreateSessionCommand) -> Result<CreateSessionResult, ValidationError> {
        // 1. The identifier must be present before anything is issued
        let user_id = cmd
            .user_id
            .ok_or_else(|| ValidationError::missing_field("userId"))?;

        // 2. Issue the session window and its signed token
        let IssuedSession { token, session } = self.issuer.issue(&user_id)?;

        Ok(CreateSessionResult { token, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::TokenCodec;

    fn handler() -> CreateSessionHandler {
        CreateSessionHandler::new(SessionIssuer::new(TokenCodec::new("login_handler_test_key")))
    }

    #[test]
    fn opens_a_session_for_a_known_user() {
        let result = handler()
            .handle(CreateSessionCommand {
                user_id: Some("user-42".to_string()),
            })
            .unwrap();

        assert!(!result.token.is_empty());
        assert_eq!(result.session.principal_id().as_str(), "user-42");
    }

    #[test]
    fn rejects_a_request_without_a_user_id() {
        let err = handler().handle(CreateSessionCommand::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { field } if field == "userId"
        ));
    }

    #[test]
    fn rejects_a_blank_user_id() {
        let err = handler()
            .handle(CreateSessionCommand {
                user_id: Some("   ".to_string()),
            })
            .unwrap_err();
        assert_eq!(err.field(), "userId");
    }

    #[test]
    fn issued_window_follows_the_issuer() {
        let issuer = SessionIssuer::new(TokenCodec::new("short_window_key")).with_validity_days(2);
        let result = CreateSessionHandler::new(issuer)
            .handle(CreateSessionCommand {
                user_id: Some("user-1".to_string()),
            })
            .unwrap();

        let expected = result.session.issued_at().plus_days(2);
        assert_eq!(result.session.expires_at(), expected);
    }
}
