//! Notification events.

use rust_decimal::Decimal;

use crate::domain::foundation::ValidationError;

/// The three notification kinds this service sends. Closed set: adding a
/// kind is a compile-time change, and every match on it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A shopper submitted a new gift card request (goes to the operator).
    Submission,
    /// The operator confirmed a request (goes back to the shopper).
    Confirmation,
    /// The requested card is not available (goes back to the shopper).
    Unavailable,
}

impl NotificationKind {
    /// Parses the wire string sent by clients.
    ///
    /// Anything outside the closed set fails with a validation error on
    /// the `type` field, before any transport is touched.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "submission" => Ok(NotificationKind::Submission),
            "confirmation" => Ok(NotificationKind::Confirmation),
            "not-available" => Ok(NotificationKind::Unavailable),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown notification type '{}'", other),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Submission => "submission",
            NotificationKind::Confirmation => "confirmation",
            NotificationKind::Unavailable => "not-available",
        }
    }
}

/// One gift card request event, consumed exactly once by dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub category: String,
    pub subcategory: String,
    pub amount: Decimal,
    pub quantity: u32,
    /// The requesting shopper's address. Appears in the submission body
    /// and receives the confirmation and not-available mails.
    pub user_email: String,
}

impl NotificationEvent {
    /// Resolves the destination mailbox for this event.
    ///
    /// Submissions go to the operator; request outcomes go back to the
    /// shopper who asked.
    pub fn recipient<'a>(&'a self, operator_email: &'a str) -> &'a str {
        match self.kind {
            NotificationKind::Submission => operator_email,
            NotificationKind::Confirmation | NotificationKind::Unavailable => &self.user_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn event(kind: NotificationKind) -> NotificationEvent {
        NotificationEvent {
            kind,
            category: "Gaming".to_string(),
            subcategory: "Steam".to_string(),
            amount: dec!(100),
            quantity: 2,
            user_email: "shopper@example.com".to_string(),
        }
    }

    #[test]
    fn parse_accepts_the_three_known_kinds() {
        assert_eq!(
            NotificationKind::parse("submission").unwrap(),
            NotificationKind::Submission
        );
        assert_eq!(
            NotificationKind::parse("confirmation").unwrap(),
            NotificationKind::Confirmation
        );
        assert_eq!(
            NotificationKind::parse("not-available").unwrap(),
            NotificationKind::Unavailable
        );
    }

    #[test]
    fn parse_rejects_unknown_kinds_naming_the_type_field() {
        for raw in ["payment-made", "SUBMISSION", "", "cancelled"] {
            let err = NotificationKind::parse(raw).unwrap_err();
            assert_eq!(err.field(), "type");
        }
    }

    #[test]
    fn kind_strings_roundtrip() {
        for kind in [
            NotificationKind::Submission,
            NotificationKind::Confirmation,
            NotificationKind::Unavailable,
        ] {
            assert_eq!(NotificationKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn submission_routes_to_the_operator() {
        let event = event(NotificationKind::Submission);
        let recipient = event.recipient("ops@cardvault.example");
        assert_eq!(recipient, "ops@cardvault.example");
    }

    #[test]
    fn request_outcomes_route_back_to_the_shopper() {
        assert_eq!(
            event(NotificationKind::Confirmation).recipient("ops@cardvault.example"),
            "shopper@example.com"
        );
        assert_eq!(
            event(NotificationKind::Unavailable).recipient("ops@cardvault.example"),
            "shopper@example.com"
        );
    }
}
