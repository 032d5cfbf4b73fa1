//! Mock mail transport for testing.
//!
//! Records every delivery attempt so tests can assert on exactly what was
//! sent (or that nothing was), and supports error injection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{MailTransport, MailTransportError, OutboundEmail};

/// Mock mail transport for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockMailTransport::new();
///
/// dispatcher.dispatch(event).await?;
///
/// let sent = mock.sent();
/// assert_eq!(sent.len(), 1);
/// assert_eq!(sent[0].to, "ops@example.com");
/// ```
#[derive(Default)]
pub struct MockMailTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Every mail passed to `send`, in order, including failed attempts.
    sent: Vec<OutboundEmail>,

    /// Error returned by every send when set.
    fail_with: Option<MailTransportError>,
}

impl MockMailTransport {
    /// Create a mock that accepts every delivery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose deliveries all fail with the given error.
    pub fn failing(error: MailTransportError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().fail_with = Some(error);
        mock
    }

    /// Create a mock that fails as if the mail service were down.
    pub fn unreachable() -> Self {
        Self::failing(MailTransportError::Unreachable(
            "mock transport failure".to_string(),
        ))
    }

    /// Set the error returned by subsequent sends; `None` restores success.
    pub fn set_error(&self, error: Option<MailTransportError>) {
        self.inner.lock().unwrap().fail_with = error;
    }

    /// All recorded deliveries, in order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.inner.lock().unwrap().sent.clone()
    }

    /// Number of delivery attempts.
    pub fn sent_count(&self) -> usize {
        self.inner.lock().unwrap().sent.len()
    }
}

impl Clone for MockMailTransport {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailTransportError> {
        let mut state = self.inner.lock().unwrap();
        state.sent.push(email);

        match &state.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
