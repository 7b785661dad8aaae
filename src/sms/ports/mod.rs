//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the core requires from its
//! collaborators. Adapters implement these ports to connect the core to the
//! SMS provider and to sources of randomness.

pub mod reference;
pub mod transport;
pub mod validator;

pub use reference::ReferenceAllocator;
pub use transport::{SmsTransport, TransportError, TransportResult};
pub use validator::{MessageValidator, ValidationConfig};
