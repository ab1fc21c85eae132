use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::contact::models::{ContactMessage, INVALID_EMAIL_MESSAGE, REQUIRED_FIELDS_MESSAGE};

/// `local@domain.tld` with no whitespace and exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingFields,

    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,
}

/// Checks field presence first, then email shape.
///
/// Whitespace-only values count as missing. The message is never altered;
/// only `is_valid_email` sees a trimmed address.
pub fn validate_contact(msg: &ContactMessage) -> Result<(), ValidationError> {
    let blank = |s: &str| s.trim().is_empty();
    if blank(&msg.name) || blank(&msg.email) || blank(&msg.message) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&msg.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}
