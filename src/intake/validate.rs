//! Free-text extraction and validation.
//!
//! Patterns are compiled once and shared by every session.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::IntakeError;

/// Lead-in phrases (any case) followed by one or two ASCII-letter words.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:my name is|i am|it's|you can call me)\s+([a-zA-Z]+(?: [a-zA-Z]+)?)")
        .expect("name pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// Characters ignored when counting phone digits.
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("phone separator pattern compiles"));

static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone digits pattern compiles"));

static GRATITUDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)thank you|thanks|thank|appreciate it|much obliged")
        .expect("gratitude pattern compiles")
});

/// Pull a name out of phrases like "my name is Jane Doe".
///
/// Falls back to the trimmed input when no lead-in phrase matches.
pub fn extract_name(text: &str) -> String {
    NAME_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| text.trim().to_string())
}

/// Check an email address against the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), IntakeError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(IntakeError::InvalidEmailFormat)
    }
}

/// Check that a phone number has 7-15 digits once spaces, dashes and
/// parentheses are removed.
pub fn validate_phone(phone: &str) -> Result<(), IntakeError> {
    let digits = PHONE_SEPARATORS.replace_all(phone, "");
    if PHONE_DIGITS.is_match(&digits) {
        Ok(())
    } else {
        Err(IntakeError::InvalidPhoneFormat)
    }
}

/// Whether the message says thank you in any of the recognized ways.
pub fn is_gratitude(text: &str) -> bool {
    GRATITUDE_PATTERN.is_match(text)
}
