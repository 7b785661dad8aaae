//! Concatenation User Data Header (UDH) for multi-part messages.
//!
//! The header is the one bit-exact wire contract of the crate: handsets use
//! it to reassemble the parts of a concatenated message in order.

use serde::{Serialize, Serializer};
use std::fmt;

/// Length of the user data header that follows the UDHL octet.
const UDH_LENGTH: u8 = 5;

/// Information element identifier for concatenated messages with an 8-bit
/// reference number.
const CONCAT_IEI: u8 = 0;

/// Length of the concatenation information element data.
const CONCAT_IE_LENGTH: u8 = 3;

/// CSMS reference number shared by every segment of one concatenated group.
///
/// Rendered, and serialized, as two uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use telegraph::sms::domain::CsmsReference;
///
/// assert_eq!(CsmsReference::new(0xA7).to_string(), "A7");
/// assert_eq!(CsmsReference::new(3).to_string(), "03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CsmsReference(u8);

impl CsmsReference {
    /// Wraps a raw reference value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw reference value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CsmsReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Concatenation header attached to a single segment.
///
/// `position` is 1-based and never exceeds `total`. Serializes as the
/// 12-character wire string.
///
/// # Examples
///
/// ```
/// use telegraph::sms::domain::{CsmsReference, UserDataHeader};
///
/// let header = UserDataHeader::new(CsmsReference::new(0xA7), 3, 2);
/// assert_eq!(header.to_string(), "050003A70302");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDataHeader {
    reference: CsmsReference,
    total: u8,
    position: u8,
}

impl UserDataHeader {
    /// Number of characters in the rendered header.
    pub const ENCODED_LEN: usize = 12;

    /// Creates a header for the segment at `position` of `total`.
    #[must_use]
    pub const fn new(reference: CsmsReference, total: u8, position: u8) -> Self {
        Self {
            reference,
            total,
            position,
        }
    }

    /// Returns the group reference.
    #[must_use]
    pub const fn reference(&self) -> CsmsReference {
        self.reference
    }

    /// Returns the number of segments in the group.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the 1-based position of this segment.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }
}

impl fmt::Display for UserDataHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The three leading constants are written as two decimal digits.
        write!(
            f,
            "{UDH_LENGTH:02}{CONCAT_IEI:02}{CONCAT_IE_LENGTH:02}{}{:02X}{:02X}",
            self.reference, self.total, self.position
        )
    }
}

impl Serialize for CsmsReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for UserDataHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xA7, 3, 2, "050003A70302")]
    #[case(0x00, 1, 1, "050003000101")]
    #[case(0xFF, 255, 16, "050003FFFF10")]
    fn header_renders_wire_format(
        #[case] reference: u8,
        #[case] total: u8,
        #[case] position: u8,
        #[case] expected: &str,
    ) {
        let header = UserDataHeader::new(CsmsReference::new(reference), total, position);
        assert_eq!(header.to_string(), expected);
    }

    #[rstest]
    fn header_has_fixed_length() {
        let header = UserDataHeader::new(CsmsReference::new(0x0B), 12, 10);
        let rendered = header.to_string();
        assert_eq!(rendered.len(), UserDataHeader::ENCODED_LEN);
        assert!(rendered.starts_with("050003"));
        assert_eq!(&rendered[6..8], "0B");
        assert_eq!(&rendered[8..10], "0C");
        assert_eq!(&rendered[10..12], "0A");
    }

    #[rstest]
    fn header_serializes_as_wire_string() {
        let header = UserDataHeader::new(CsmsReference::new(0xA7), 3, 2);
        let value = serde_json::to_value(header).expect("header serializes");
        assert_eq!(value, serde_json::json!("050003A70302"));
        let reference = serde_json::to_value(header.reference()).expect("reference serializes");
        assert_eq!(reference, serde_json::json!("A7"));
    }
}
