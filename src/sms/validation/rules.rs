//! Individual validation rule implementations.
//!
//! Each rule is a pure function that checks one field of a message and
//! returns `Ok(())` or a specific `ValidationError`.

use crate::sms::{domain::Message, error::ValidationError, ports::validator::ValidationConfig};

/// Validates that `number` is in international format.
///
/// A valid number is a `+` followed only by ASCII digits, with a total
/// length (including the `+`) within the configured bounds.
///
/// # Errors
///
/// Returns `ValidationError::InvalidRecipient` if the number is malformed.
///
/// # Examples
///
/// ```
/// use telegraph::sms::ports::validator::ValidationConfig;
/// use telegraph::sms::validation::rules::validate_international_number;
///
/// let config = ValidationConfig::default();
/// assert!(validate_international_number("+31612345678", &config).is_ok());
/// assert!(validate_international_number("0612345678", &config).is_err());
/// ```
pub fn validate_international_number(
    number: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let Some(digits) = number.strip_prefix('+') else {
        return Err(ValidationError::invalid_recipient(number));
    };

    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (config.min_recipient_length..=config.max_recipient_length).contains(&number.len());

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::invalid_recipient(number))
    }
}

/// Validates the recipient of a message.
///
/// # Errors
///
/// Returns `ValidationError::InvalidRecipient` if the recipient is malformed.
pub fn validate_recipient(
    message: &Message,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    validate_international_number(message.recipient(), config)
}

/// Validates that the originator is not empty.
///
/// # Errors
///
/// Returns `ValidationError::EmptyOriginator` if the originator is empty.
pub fn validate_originator(message: &Message) -> Result<(), ValidationError> {
    if message.originator().is_empty() {
        return Err(ValidationError::EmptyOriginator);
    }
    Ok(())
}

/// Validates that the body is not empty.
///
/// # Errors
///
/// Returns `ValidationError::EmptyBody` if the body is empty.
pub fn validate_body_not_empty(message: &Message) -> Result<(), ValidationError> {
    if message.body().is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(())
}

/// Validates that the body fits in one concatenated group.
///
/// # Errors
///
/// Returns `ValidationError::BodyTooLong` if the body exceeds the configured
/// number of code points.
pub fn validate_body_length(
    message: &Message,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual = message.char_count();
    if actual > config.max_body_chars {
        return Err(ValidationError::BodyTooLong {
            actual,
            limit: config.max_body_chars,
        });
    }
    Ok(())
}
