//! Dispatch orchestration: single send versus segmented send.
//!
//! Segments of one group are sent strictly in order. The first transport
//! failure aborts the rest of the group; segments already sent are not
//! recalled, and no retries happen at this layer.

use std::sync::Arc;

use thiserror::Error;

use crate::sms::{
    domain::Message,
    error::{SegmentationError, ValidationError},
    ports::{MessageValidator, ReferenceAllocator, SmsTransport, TransportError},
    segmentation::{Segmenter, exceeds_limit},
};

/// Service-level errors for dispatch operations.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The message failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The message could not be split; nothing was sent.
    #[error(transparent)]
    Segmentation(#[from] SegmentationError),
    /// The transport rejected a message; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Dispatch orchestration service.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use telegraph::sms::adapters::{memory::InMemoryTransport, reference::FixedReferenceAllocator};
/// use telegraph::sms::domain::Message;
/// use telegraph::sms::services::DispatchService;
/// use telegraph::sms::validation::DefaultMessageValidator;
///
/// # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
/// let transport = Arc::new(InMemoryTransport::new());
/// let service = DispatchService::new(
///     Arc::clone(&transport),
///     Arc::new(FixedReferenceAllocator::new(0xA7)),
///     Arc::new(DefaultMessageValidator::new()),
/// );
///
/// let message = Message::new("+31612345678", "MessageBird", "a".repeat(200));
/// service.submit(&message).await.expect("dispatch succeeds");
/// assert_eq!(transport.sent().expect("readable").len(), 2);
/// # })).expect("runtime builds");
/// ```
pub struct DispatchService<T, A, V>
where
    T: SmsTransport,
    A: ReferenceAllocator,
    V: MessageValidator,
{
    transport: Arc<T>,
    segmenter: Segmenter<A>,
    validator: Arc<V>,
}

impl<T, A, V> Clone for DispatchService<T, A, V>
where
    T: SmsTransport,
    A: ReferenceAllocator,
    V: MessageValidator,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            segmenter: self.segmenter.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<T, A, V> DispatchService<T, A, V>
where
    T: SmsTransport,
    A: ReferenceAllocator,
    V: MessageValidator,
{
    /// Creates a new dispatch service.
    #[must_use]
    pub const fn new(transport: Arc<T>, allocator: Arc<A>, validator: Arc<V>) -> Self {
        Self {
            transport,
            segmenter: Segmenter::new(allocator),
            validator,
        }
    }

    /// Validates `message` and sends it.
    ///
    /// Validation failures are returned before any dispatch attempt.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Validation`] for invalid input, otherwise the
    /// errors of [`Self::send`].
    pub async fn submit(&self, message: &Message) -> DispatchResult<()> {
        if let Err(err) = self.validator.validate(message) {
            tracing::warn!(error = %err, "message rejected by validation");
            return Err(err.into());
        }
        self.send(message).await
    }

    /// Sends `message`, splitting it into segments when it is too long.
    ///
    /// A message within the limit, or one that is already a segment, is
    /// forwarded unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Transport`] with the first transport failure,
    /// or [`DispatchError::Segmentation`] if the body cannot be split.
    pub async fn send(&self, message: &Message) -> DispatchResult<()> {
        if message.is_segment() || !exceeds_limit(message) {
            self.transport.send(message).await.inspect_err(|err| {
                tracing::error!(error = %err, "message dispatch failed");
            })?;
            tracing::info!(recipient = message.recipient(), "message dispatched");
            return Ok(());
        }

        let segments = self.segmenter.concatenate(message)?;
        let total = segments.len();
        for (index, segment) in segments.iter().enumerate() {
            let position = index + 1;
            tracing::debug!(position, total, "dispatching segment");
            self.transport.send(segment).await.inspect_err(|err| {
                tracing::error!(
                    error = %err,
                    position,
                    total,
                    "segment dispatch failed; aborting group"
                );
            })?;
        }

        tracing::info!(
            recipient = message.recipient(),
            segments = total,
            "concatenated message dispatched"
        );
        Ok(())
    }
}
