//! Domain error types for message validation and segmentation.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use thiserror::Error;

/// Errors that can occur during message validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The recipient is not an international number.
    #[error("{0:?} is not a valid recipient number")]
    InvalidRecipient(String),

    /// The originator is empty.
    #[error("originator can not be empty")]
    EmptyOriginator,

    /// The body is empty.
    #[error("message can not be empty")]
    EmptyBody,

    /// The body needs more segments than the header can number.
    #[error("message of {actual} characters exceeds limit of {limit} characters")]
    BodyTooLong {
        /// Body length in code points.
        actual: usize,
        /// Maximum body length in code points.
        limit: usize,
    },

    /// Multiple validation errors occurred.
    #[error("{}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Creates an invalid recipient error.
    #[must_use]
    pub fn invalid_recipient(recipient: impl Into<String>) -> Self {
        Self::InvalidRecipient(recipient.into())
    }

    /// Combines validation errors into a single error.
    ///
    /// A single error is returned directly rather than wrapped. Returns
    /// `None` when `errors` is empty.
    #[must_use]
    pub fn collect(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns the individual errors.
    ///
    /// A non-aggregate error yields a one-element slice.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }
}

/// Errors that can occur while splitting a message into segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentationError {
    /// The body needs more segments than a one-byte total can express.
    #[error("message needs {required} segments, at most {max} are supported")]
    TooManySegments {
        /// Number of segments the body would need.
        required: usize,
        /// Maximum number of segments in one group.
        max: usize,
    },

    /// A segment was requested from a message that is already a segment.
    #[error("message is already a segment and can not be split again")]
    AlreadySegmented,
}
