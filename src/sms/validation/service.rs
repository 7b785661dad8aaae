//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageValidator` port,
//! combining the individual rules into one validator.

use crate::sms::{
    domain::Message,
    error::ValidationError,
    ports::validator::{MessageValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the message validator.
///
/// Applies every rule, collecting errors so the caller can report all
/// problems in one response rather than failing on the first.
///
/// # Examples
///
/// ```
/// use telegraph::sms::domain::Message;
/// use telegraph::sms::ports::validator::MessageValidator;
/// use telegraph::sms::validation::service::DefaultMessageValidator;
///
/// let validator = DefaultMessageValidator::new();
/// let message = Message::new("+31612345678", "MessageBird", "hi");
/// assert!(validator.validate(&message).is_ok());
///
/// let invalid = Message::new("", "X", "Y");
/// assert!(validator.validate(&invalid).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn validate(&self, message: &Message) -> ValidationResult<()> {
        let errors: Vec<ValidationError> = [
            rules::validate_recipient(message, &self.config),
            rules::validate_originator(message),
            rules::validate_body_not_empty(message),
            rules::validate_body_length(message, &self.config),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        ValidationError::collect(errors).map_or(Ok(()), Err)
    }
}

// Unit tests for DefaultMessageValidator live in
// src/sms/tests/validation_tests.rs.
