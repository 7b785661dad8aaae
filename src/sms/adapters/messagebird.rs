//! `MessageBird` REST API transport.
//!
//! Whole messages are submitted as plain text; segments are submitted with
//! type `binary` and their header in `typeDetails.udh`. Requests are
//! throttled to one per configured interval across all callers.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::sms::{
    domain::Message,
    ports::transport::{SmsTransport, TransportError, TransportResult},
};

/// Default REST endpoint of the provider.
pub const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";

/// Settings for [`MessageBirdTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBirdConfig {
    /// Access key sent in the `Authorization` header.
    pub access_key: String,
    /// Base URL of the REST API, without a trailing `/messages`.
    pub base_url: String,
    /// Minimum spacing between two provider requests.
    pub throttle: Duration,
    /// Timeout applied to each provider request.
    pub request_timeout: Duration,
}

impl MessageBirdConfig {
    /// Creates a configuration with default endpoint and limits.
    #[must_use]
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            throttle: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request spacing.
    #[must_use]
    pub const fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessageRequest<'a> {
    originator: &'a str,
    recipients: [&'a str; 1],
    body: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_details: Option<TypeDetails>,
}

#[derive(Debug, Serialize)]
struct TypeDetails {
    udh: String,
}

impl<'a> From<&'a Message> for CreateMessageRequest<'a> {
    fn from(message: &'a Message) -> Self {
        let type_details = message.header().map(|header| TypeDetails {
            udh: header.to_string(),
        });
        Self {
            originator: message.originator(),
            recipients: [message.recipient()],
            body: message.body(),
            kind: type_details.as_ref().map(|_| "binary"),
            type_details,
        }
    }
}

/// Throttled HTTP client for the `MessageBird` messages endpoint.
#[derive(Debug)]
pub struct MessageBirdTransport {
    client: reqwest::Client,
    endpoint: String,
    authorization: String,
    throttle: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl MessageBirdTransport {
    /// Creates a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the HTTP client cannot be
    /// built.
    pub fn new(config: MessageBirdConfig) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(TransportError::request)?;

        Ok(Self {
            client,
            endpoint: format!("{}/messages", config.base_url.trim_end_matches('/')),
            authorization: format!("AccessKey {}", config.access_key),
            throttle: config.throttle,
            next_slot: Mutex::new(None),
        })
    }

    /// Waits until this caller's request slot opens.
    ///
    /// Slots are reserved under the lock and awaited outside it, so callers
    /// are served in arrival order without holding the lock while sleeping.
    async fn wait_for_slot(&self) {
        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next_slot.map_or(now, |next| next.max(now));
            *next_slot = Some(slot + self.throttle);
            slot
        };
        tokio::time::sleep_until(slot).await;
    }
}

#[async_trait]
impl SmsTransport for MessageBirdTransport {
    async fn send(&self, message: &Message) -> TransportResult<()> {
        self.wait_for_slot().await;

        let request = CreateMessageRequest::from(message);
        tracing::debug!(
            recipient = message.recipient(),
            binary = message.is_segment(),
            "submitting message to provider"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .json(&request)
            .send()
            .await
            .map_err(TransportError::request)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(TransportError::Rejected {
            status: status.as_u16(),
            body: rejection_body(response.text().await),
        })
    }
}

/// Returns the body of a rejected response, or an empty string if it could
/// not be read.
fn rejection_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "failed to read rejection body");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::domain::{CsmsReference, UserDataHeader};
    use serde_json::json;

    #[test]
    fn whole_message_serialises_as_plain_text() {
        let message = Message::new("+31612345678", "MessageBird", "hello");
        let value = serde_json::to_value(CreateMessageRequest::from(&message))
            .expect("request serialises");

        assert_eq!(
            value,
            json!({
                "originator": "MessageBird",
                "recipients": ["+31612345678"],
                "body": "hello",
            })
        );
    }

    #[test]
    fn segment_serialises_as_binary_with_udh() {
        let source = Message::new("+31612345678", "MessageBird", "ignored");
        let header = UserDataHeader::new(CsmsReference::new(0xA7), 3, 2);
        let segment = Message::segment_of(&source, "6869".to_owned(), header);
        let value = serde_json::to_value(CreateMessageRequest::from(&segment))
            .expect("request serialises");

        assert_eq!(
            value,
            json!({
                "originator": "MessageBird",
                "recipients": ["+31612345678"],
                "body": "6869",
                "type": "binary",
                "typeDetails": { "udh": "050003A70302" },
            })
        );
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let config = MessageBirdConfig::new("key").with_base_url("http://localhost:1234/");
        let transport = MessageBirdTransport::new(config).expect("client builds");
        assert_eq!(transport.endpoint, "http://localhost:1234/messages");
        assert_eq!(transport.authorization, "AccessKey key");
    }

    #[test]
    fn rejection_body_keeps_readable_text() {
        assert_eq!(rejection_body(Ok("denied".to_owned())), "denied");
    }

    #[tokio::test]
    async fn rejection_body_falls_back_to_empty_on_read_error() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("nothing listens on port 1");

        assert_eq!(rejection_body(Err(err)), "");
    }

    #[tokio::test(start_paused = true)]
    async fn slots_are_spaced_by_the_throttle() {
        let config = MessageBirdConfig::new("key").with_throttle(Duration::from_secs(1));
        let transport = MessageBirdTransport::new(config).expect("client builds");
        let start = Instant::now();

        transport.wait_for_slot().await;
        transport.wait_for_slot().await;
        transport.wait_for_slot().await;

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(start.elapsed() < Duration::from_secs(3));
    }
}
