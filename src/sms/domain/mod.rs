//! Domain types for outbound short messages.
//!
//! These types carry no infrastructure dependencies. A [`Message`] is either
//! whole (no header) or a segment of a concatenated group (header present).

mod header;
mod message;

pub use header::{CsmsReference, UserDataHeader};
pub use message::Message;
