//! DispatchNotificationHandler - Command handler for notification mail.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::notification::{templates, NotificationEvent, NotificationKind};
use crate::ports::{MailTransport, MailTransportError, OutboundEmail};

/// Command carrying a raw notification submission.
///
/// Only the kind gates dispatch; the remaining fields render into the
/// mail body as given, defaults included.
#[derive(Debug, Clone, Default)]
pub struct DispatchNotificationCommand {
    pub kind: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub amount: Decimal,
    pub quantity: u32,
    pub user_email: String,
}

/// Result of a successful dispatch.
#[derive(Debug, Clone)]
pub struct DispatchNotificationResult {
    pub recipient: String,
    pub subject: &'static str,
}

/// Why a dispatch failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The submission named no known notification kind.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The mail transport could not deliver the message.
    #[error(transparent)]
    Delivery(#[from] MailTransportError),
}

/// Handler composing and sending notification mails.
pub struct DispatchNotificationHandler {
    transport: Arc<dyn MailTransport>,
    operator_email: String,
}

impl DispatchNotificationHandler {
    pub fn new(transport: Arc<dyn MailTransport>, operator_email: impl Into<String>) -> Self {
        Self {
            transport,
            operator_email: operator_email.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: DispatchNotificationCommand,
    ) -> Result<DispatchNotificationResult, DispatchError> {
        // 1. The kind gates everything; unknown kinds never touch the transport
        let kind = NotificationKind::parse(cmd.kind.as_deref().unwrap_or_default())?;

        // 2. Build the event and resolve where it goes
        let event = NotificationEvent {
            kind,
            category: cmd.category,
            subcategory: cmd.subcategory,
            amount: cmd.amount,
            quantity: cmd.quantity,
            user_email: cmd.user_email,
        };
        let recipient = event.recipient(&self.operator_email).to_string();

        // 3. Compose and send, one attempt
        let subject = templates::subject(kind);
        self.transport
            .send(OutboundEmail {
                to: recipient.clone(),
                subject: subject.to_string(),
                body: templates::body(&event),
            })
            .await?;

        Ok(DispatchNotificationResult { recipient, subject })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::MockMailTransport;
    use rust_decimal_macros::dec;

    const OPERATOR: &str = "requests@cardvault.test";

    fn command(kind: &str) -> DispatchNotificationCommand {
        DispatchNotificationCommand {
            kind: Some(kind.to_string()),
            category: "Gaming".to_string(),
            subcategory: "Steam".to_string(),
            amount: dec!(100),
            quantity: 2,
            user_email: "shopper@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn submission_goes_to_the_operator() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let result = handler.handle(command("submission")).await.unwrap();

        assert_eq!(result.recipient, OPERATOR);
        assert_eq!(result.subject, "New Gift Card Request Submitted");

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, OPERATOR);
        assert!(sent[0].body.contains("User Email: shopper@example.com"));
    }

    #[tokio::test]
    async fn confirmation_goes_back_to_the_shopper() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let result = handler.handle(command("confirmation")).await.unwrap();

        assert_eq!(result.recipient, "shopper@example.com");
        assert_eq!(transport.sent()[0].subject, "Gift Card Request Confirmed");
    }

    #[tokio::test]
    async fn not_available_goes_back_to_the_shopper() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let result = handler.handle(command("not-available")).await.unwrap();

        assert_eq!(result.recipient, "shopper@example.com");
        assert_eq!(
            transport.sent()[0].subject,
            "Gift Card Request Not Available"
        );
    }

    #[tokio::test]
    async fn unknown_kind_never_touches_the_transport() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let err = handler.handle(command("payment-made")).await.unwrap_err();

        assert!(matches!(err, DispatchError::Invalid(_)));
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn missing_kind_never_touches_the_transport() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let err = handler
            .handle(DispatchNotificationCommand::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Invalid(_)));
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn transport_rejection_surfaces_as_delivery_failure() {
        let transport = Arc::new(MockMailTransport::failing(MailTransportError::Rejected {
            status: 422,
        }));
        let handler = DispatchNotificationHandler::new(transport, OPERATOR);

        let err = handler.handle(command("submission")).await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Delivery(MailTransportError::Rejected { status: 422 })
        ));
    }

    #[tokio::test]
    async fn empty_detail_fields_still_dispatch() {
        let transport = Arc::new(MockMailTransport::new());
        let handler = DispatchNotificationHandler::new(transport.clone(), OPERATOR);

        let cmd = DispatchNotificationCommand {
            kind: Some("submission".to_string()),
            ..Default::default()
        };
        handler.handle(cmd).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].to, OPERATOR);
        assert!(sent[0].body.contains("Category: \n"));
        assert!(sent[0].body.contains("Amount: 0\n"));
    }
}
