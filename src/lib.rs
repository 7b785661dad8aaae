//! Telegraph: an HTTP front for sending short messages.
//!
//! This crate validates message requests, splits long messages into
//! concatenated segments, and forwards them to a third-party SMS provider.
//!
//! # Architecture
//!
//! Telegraph follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message and header types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the provider and randomness
//! - **Adapters**: Concrete implementations of ports (provider API, in-memory)
//!
//! # Modules
//!
//! - [`sms`]: Message validation, segmentation, and dispatch
//! - [`http`]: The HTTP request boundary
//! - [`config`]: Command line and environment configuration

pub mod config;
pub mod http;
pub mod sms;
