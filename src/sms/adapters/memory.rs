//! In-memory implementation of the `SmsTransport` port.
//!
//! Records every accepted message instead of delivering it. Used by tests.
//! The server's dry-run mode uses [`InMemoryTransport::logging_only`], which
//! logs each message and keeps nothing.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::sms::{
    domain::Message,
    ports::transport::{SmsTransport, TransportError, TransportResult},
};

#[derive(Debug, Default)]
struct TransportState {
    attempts: usize,
    sent: Vec<Message>,
}

/// Recording transport with optional failure injection.
///
/// Thread-safe via an internal [`Mutex`]; clones share state.
///
/// # Example
///
/// ```
/// use telegraph::sms::adapters::memory::InMemoryTransport;
///
/// let transport = InMemoryTransport::failing_on(2);
/// assert!(transport.sent().unwrap_or_default().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<Mutex<TransportState>>,
    fail_on_attempt: Option<usize>,
    discard: bool,
}

impl InMemoryTransport {
    /// Creates a transport that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that rejects the `attempt`-th call (1-based) and
    /// accepts all others.
    #[must_use]
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::default()
        }
    }

    /// Creates a transport that logs every message and records none of them.
    ///
    /// [`sent`](Self::sent) stays empty, so memory use does not grow with
    /// the number of messages handled. Attempts are still counted.
    #[must_use]
    pub fn logging_only() -> Self {
        Self {
            discard: true,
            ..Self::default()
        }
    }

    /// Returns the messages accepted so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the state lock is poisoned.
    pub fn sent(&self) -> TransportResult<Vec<Message>> {
        Ok(self.lock()?.sent.clone())
    }

    /// Returns the number of send attempts, including rejected ones.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the state lock is poisoned.
    pub fn attempts(&self) -> TransportResult<usize> {
        Ok(self.lock()?.attempts)
    }

    fn lock(&self) -> TransportResult<MutexGuard<'_, TransportState>> {
        self.state
            .lock()
            .map_err(|err| TransportError::other(err.to_string()))
    }
}

#[async_trait]
impl SmsTransport for InMemoryTransport {
    async fn send(&self, message: &Message) -> TransportResult<()> {
        let mut state = self.lock()?;
        state.attempts += 1;

        if self.fail_on_attempt == Some(state.attempts) {
            return Err(TransportError::other(format!(
                "injected failure on attempt {}",
                state.attempts
            )));
        }

        tracing::info!(
            recipient = message.recipient(),
            originator = message.originator(),
            header = ?message.header().map(ToString::to_string),
            body = message.body(),
            "accepted message"
        );
        if !self.discard {
            state.sent.push(message.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(body: &str) -> Message {
        Message::new("+31612345678", "MessageBird", body)
    }

    #[tokio::test]
    async fn records_messages_in_order() {
        let transport = InMemoryTransport::new();
        for body in ["one", "two", "three"] {
            transport.send(&message(body)).await.expect("send succeeds");
        }

        let bodies: Vec<String> = transport
            .sent()
            .expect("state readable")
            .iter()
            .map(|m| m.body().to_owned())
            .collect();
        assert_eq!(bodies, ["one", "two", "three"]);
        assert_eq!(transport.attempts().expect("state readable"), 3);
    }

    #[tokio::test]
    async fn injected_failure_rejects_only_the_chosen_attempt() {
        let transport = InMemoryTransport::failing_on(2);

        assert!(transport.send(&message("one")).await.is_ok());
        assert!(matches!(
            transport.send(&message("two")).await,
            Err(TransportError::Other(_))
        ));
        assert!(transport.send(&message("three")).await.is_ok());

        assert_eq!(transport.sent().expect("state readable").len(), 2);
        assert_eq!(transport.attempts().expect("state readable"), 3);
    }

    #[tokio::test]
    async fn logging_only_transport_keeps_no_messages() {
        let transport = InMemoryTransport::logging_only();
        for n in 0..1_000 {
            transport
                .send(&message(&format!("message {n}")))
                .await
                .expect("send succeeds");
        }

        assert!(transport.sent().expect("state readable").is_empty());
        assert_eq!(transport.attempts().expect("state readable"), 1_000);
    }
}
