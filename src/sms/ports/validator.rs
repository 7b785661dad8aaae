//! Validator port for message validation.

use crate::sms::{domain::Message, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for message validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::collect` to combine errors
/// - Be stateless and thread-safe
pub trait MessageValidator: Send + Sync {
    /// Validates a message against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails. Multiple failures are
    /// combined using `ValidationError::Multiple`.
    fn validate(&self, message: &Message) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use telegraph::sms::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_recipient_length, 8);
/// assert_eq!(config.max_recipient_length, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum recipient length, including the leading `+`.
    pub min_recipient_length: usize,
    /// Maximum recipient length, including the leading `+`.
    pub max_recipient_length: usize,
    /// Maximum body length in code points.
    pub max_body_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_recipient_length: 8,
            max_recipient_length: 16,
            max_body_chars: crate::sms::segmentation::MAX_BODY_CHARS,
        }
    }
}
