//! Unit tests for the sms module.
//!
//! Tests are organised by component, covering happy paths, error cases, and
//! edge cases for the public APIs.

mod fixtures;
