//! Splitting of over-length messages into concatenated segments.
//!
//! Lengths are measured in Unicode code points, never bytes, so a multi-byte
//! character is never split across two segments.

use std::sync::Arc;

use crate::sms::{
    domain::{Message, UserDataHeader},
    error::SegmentationError,
    ports::ReferenceAllocator,
};

/// Maximum number of code points in a single, unsegmented message.
pub const MAX_SINGLE_CHARS: usize = 160;

/// Maximum number of code points carried by one segment.
pub const MAX_SEGMENT_CHARS: usize = 153;

/// Maximum number of segments in one group; the header numbers them in one
/// octet.
pub const MAX_SEGMENTS: usize = u8::MAX as usize;

/// Longest body that still fits in one concatenated group.
pub const MAX_BODY_CHARS: usize = MAX_SEGMENTS * MAX_SEGMENT_CHARS;

/// Result type for segmentation operations.
pub type SegmentationResult<T> = Result<T, SegmentationError>;

/// Returns `true` if the message body is longer than one message allows.
///
/// # Examples
///
/// ```
/// use telegraph::sms::domain::Message;
/// use telegraph::sms::segmentation::exceeds_limit;
///
/// assert!(!exceeds_limit(&Message::new("+31612345678", "X", "a".repeat(160))));
/// assert!(exceeds_limit(&Message::new("+31612345678", "X", "a".repeat(161))));
/// ```
#[must_use]
pub fn exceeds_limit(message: &Message) -> bool {
    message.char_count() > MAX_SINGLE_CHARS
}

/// Splits `text` into consecutive chunks of at most `width` code points.
///
/// Returns an empty list for empty text or a zero width.
///
/// # Examples
///
/// ```
/// use telegraph::sms::segmentation::split_chars;
///
/// assert_eq!(split_chars("a#f界世", 2), vec!["a#", "f界", "世"]);
/// assert!(split_chars("", 2).is_empty());
/// assert!(split_chars("abcd", 0).is_empty());
/// ```
#[must_use]
pub fn split_chars(text: &str, width: usize) -> Vec<&str> {
    if width == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(index, _)| index);
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Builds concatenated segment groups.
///
/// The reference allocator is injected so tests can fix the group reference.
#[derive(Debug)]
pub struct Segmenter<A>
where
    A: ReferenceAllocator,
{
    allocator: Arc<A>,
}

impl<A> Clone for Segmenter<A>
where
    A: ReferenceAllocator,
{
    fn clone(&self) -> Self {
        Self {
            allocator: Arc::clone(&self.allocator),
        }
    }
}

impl<A> Segmenter<A>
where
    A: ReferenceAllocator,
{
    /// Creates a segmenter drawing group references from `allocator`.
    #[must_use]
    pub const fn new(allocator: Arc<A>) -> Self {
        Self { allocator }
    }

    /// Splits `message` into an ordered group of segments.
    ///
    /// Every segment body is the lowercase hex encoding of the UTF-8 bytes
    /// of its chunk, and every header carries the same reference. The limit
    /// is not re-checked: a short message yields a one-segment group.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::AlreadySegmented`] for a segment and
    /// [`SegmentationError::TooManySegments`] when the body needs more than
    /// [`MAX_SEGMENTS`] segments.
    pub fn concatenate(&self, message: &Message) -> SegmentationResult<Vec<Message>> {
        if message.is_segment() {
            return Err(SegmentationError::AlreadySegmented);
        }

        let chunks = split_chars(message.body(), MAX_SEGMENT_CHARS);
        let total = u8::try_from(chunks.len()).map_err(|_| SegmentationError::TooManySegments {
            required: chunks.len(),
            max: MAX_SEGMENTS,
        })?;

        let reference = self.allocator.allocate();
        let segments = (1..=total)
            .zip(chunks)
            .map(|(position, chunk)| {
                let header = UserDataHeader::new(reference, total, position);
                Message::segment_of(message, hex::encode(chunk), header)
            })
            .collect();
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ascii("abcdef", 4, vec!["abcd", "ef"])]
    #[case::exact("abcd", 2, vec!["ab", "cd"])]
    #[case::wider_than_text("abc", 10, vec!["abc"])]
    #[case::multi_byte("界世界世界", 2, vec!["界世", "界世", "界"])]
    #[case::emoji("🙂a🙂b", 3, vec!["🙂a🙂", "b"])]
    fn split_chars_respects_code_points(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(split_chars(text, width), expected);
    }

    #[rstest]
    fn body_limit_matches_segment_capacity() {
        assert_eq!(MAX_BODY_CHARS, 39_015);
    }
}
