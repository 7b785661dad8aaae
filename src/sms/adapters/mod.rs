//! Adapters for the message subsystem.
//!
//! Concrete implementations of the ports, following hexagonal architecture
//! principles. Adapters own all infrastructure concerns while the domain
//! remains pure.
//!
//! # Available Adapters
//!
//! - [`reference::RandomReferenceAllocator`]: CSMS references from the
//!   operating system's random source
//! - [`reference::FixedReferenceAllocator`]: a constant reference for
//!   deterministic tests
//! - [`memory::InMemoryTransport`]: records sent messages, with optional
//!   failure injection; `logging_only` backs dry-run mode
//! - [`messagebird::MessageBirdTransport`]: throttled client for the
//!   `MessageBird` REST API

pub mod memory;
pub mod messagebird;
pub mod reference;
