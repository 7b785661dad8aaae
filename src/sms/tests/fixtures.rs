//! Shared fixtures and helpers for sms unit tests.

use std::sync::Arc;

use crate::sms::{
    adapters::reference::FixedReferenceAllocator, domain::Message, segmentation::Segmenter,
    validation::DefaultMessageValidator,
};
use rstest::fixture;

/// Body of the reference three-part message; 323 code points.
pub const LONG_TEXT: &str = "text of more then 160 caracters that needs to be splitted in multiple messages and should be prepended by User Data Header, more random text END OF FIRST here starts second message asdiy doi asdoi asd hoiasd oiasd hoiasdh husaudg asdoiha oiasd oiasd oihsad ihasd oiasdi asdoi doiasdi asdi asd END OF SECOND third final part";

#[fixture]
pub fn default_validator() -> DefaultMessageValidator {
    DefaultMessageValidator::new()
}

#[fixture]
pub fn segmenter() -> Segmenter<FixedReferenceAllocator> {
    Segmenter::new(Arc::new(FixedReferenceAllocator::new(0xA7)))
}

pub fn message(body: impl Into<String>) -> Message {
    Message::new("+31612345678", "MessageBird", body)
}
