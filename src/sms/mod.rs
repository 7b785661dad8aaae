//! Validation, segmentation, and dispatch of short messages.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::UserDataHeader`])
//! - **Ports**: Abstract trait interfaces ([`ports::SmsTransport`], [`ports::ReferenceAllocator`], [`ports::MessageValidator`])
//! - **Adapters**: Concrete implementations ([`adapters::messagebird::MessageBirdTransport`], [`adapters::memory::InMemoryTransport`])
//! - **Validation**: Field rules enforced at the request boundary
//! - **Segmentation**: Code-point splitting and concatenation headers
//! - **Services**: The dispatch orchestrator
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use telegraph::sms::adapters::reference::FixedReferenceAllocator;
//! use telegraph::sms::domain::Message;
//! use telegraph::sms::segmentation::{Segmenter, exceeds_limit};
//!
//! let message = Message::new("+31612345678", "MessageBird", "x".repeat(320));
//! assert!(exceeds_limit(&message));
//!
//! let segmenter = Segmenter::new(Arc::new(FixedReferenceAllocator::new(0xA7)));
//! let segments = segmenter.concatenate(&message).expect("fits in one group");
//! assert_eq!(segments.len(), 3);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod segmentation;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
