//! Route handlers for the HTTP boundary.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::sms::{
    domain::Message,
    ports::{MessageValidator, ReferenceAllocator, SmsTransport},
    services::{DispatchError, DispatchService},
};

/// JSON payload accepted by `POST /send`.
///
/// Missing fields default to empty strings so they surface as validation
/// failures rather than parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendMessageRequest {
    /// International phone number of the recipient.
    #[serde(default)]
    pub recipient: String,
    /// Sender identifier.
    #[serde(default)]
    pub originator: String,
    /// Message text.
    #[serde(default, alias = "body")]
    pub message: String,
}

impl From<SendMessageRequest> for Message {
    fn from(request: SendMessageRequest) -> Self {
        Self::new(request.recipient, request.originator, request.message)
    }
}

#[derive(Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
}

pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Reads, validates, and dispatches one message.
///
/// Responds `200` with an empty body on success, `400` for unreadable or
/// invalid input, and `500` when the provider could not take the message.
pub(super) async fn send_message<T, A, V>(
    State(service): State<DispatchService<T, A, V>>,
    body: Bytes,
) -> Response
where
    T: SmsTransport + 'static,
    A: ReferenceAllocator + 'static,
    V: MessageValidator + 'static,
{
    let span = tracing::info_span!("send_message", request_id = %Uuid::new_v4());
    async move {
        let request: SendMessageRequest = match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(error = %err, "unreadable request body");
                return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
            }
        };

        let message = Message::from(request);
        match service.submit(&message).await {
            Ok(()) => StatusCode::OK.into_response(),
            Err(err) => (status_for(&err), err.to_string()).into_response(),
        }
    }
    .instrument(span)
    .await
}

const fn status_for(err: &DispatchError) -> StatusCode {
    match err {
        DispatchError::Validation(_) | DispatchError::Segmentation(_) => StatusCode::BAD_REQUEST,
        DispatchError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
