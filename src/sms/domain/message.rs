//! The outbound short message.

use super::UserDataHeader;
use serde::Serialize;

/// A short message addressed to one recipient.
///
/// Messages are immutable after construction. Segmentation produces new
/// values and never modifies the source message.
///
/// # Invariants
///
/// - A message without a header is whole; one with a header is a segment and
///   is never split again.
/// - Segments of one group share `recipient`, `originator`, and the header
///   reference.
///
/// # Examples
///
/// ```
/// use telegraph::sms::domain::Message;
///
/// let message = Message::new("+31612345678", "MessageBird", "hi");
/// assert!(!message.is_segment());
/// assert_eq!(message.char_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// International phone number of the recipient.
    recipient: String,

    /// Sender identifier shown on the handset.
    originator: String,

    /// Message text, or the hex-encoded chunk for segments.
    body: String,

    /// Concatenation header, present only on segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<UserDataHeader>,
}

impl Message {
    /// Creates a whole message.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        originator: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            originator: originator.into(),
            body: body.into(),
            header: None,
        }
    }

    /// Creates a segment carrying `body` for the group described by `header`.
    pub(crate) fn segment_of(source: &Self, body: String, header: UserDataHeader) -> Self {
        Self {
            recipient: source.recipient.clone(),
            originator: source.originator.clone(),
            body,
            header: Some(header),
        }
    }

    /// Returns the recipient number.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the originator.
    #[must_use]
    pub fn originator(&self) -> &str {
        &self.originator
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the concatenation header, if this is a segment.
    #[must_use]
    pub const fn header(&self) -> Option<&UserDataHeader> {
        self.header.as_ref()
    }

    /// Returns `true` if this message is a segment of a concatenated group.
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        self.header.is_some()
    }

    /// Returns the body length in Unicode code points.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::domain::CsmsReference;
    use rstest::rstest;

    #[rstest]
    fn whole_message_serializes_without_header() {
        let message = Message::new("+31612345678", "MessageBird", "hi");
        let value = serde_json::to_value(&message).expect("message serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "recipient": "+31612345678",
                "originator": "MessageBird",
                "body": "hi",
            })
        );
    }

    #[rstest]
    fn segment_serializes_header_as_wire_string() {
        let source = Message::new("+31612345678", "MessageBird", "ignored");
        let header = UserDataHeader::new(CsmsReference::new(0xA7), 3, 2);
        let segment = Message::segment_of(&source, "6869".to_owned(), header);

        let value = serde_json::to_value(&segment).expect("segment serializes");
        assert_eq!(value["header"], serde_json::json!("050003A70302"));
        assert_eq!(value["body"], serde_json::json!("6869"));
    }
}
