//! Transport port for delivering messages to the SMS provider.

use crate::sms::domain::Message;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Delivery contract for whole messages and segments.
///
/// A message carrying a header must be submitted as a binary, concatenated
/// part rather than plain text. Retry policy, if any, belongs to the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Attempts delivery of one message.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the provider could not be reached or
    /// refused the message.
    async fn send(&self, message: &Message) -> TransportResult<()>;
}

/// Errors returned by transport adapters.
///
/// The dispatch layer propagates these unchanged.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The provider answered with a non-success status.
    #[error("provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body returned by the provider.
        body: String,
    },

    /// The request could not be completed.
    #[error("provider request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// Adapter-level failure unrelated to the provider.
    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Wraps a request error.
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Creates an adapter-level error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
