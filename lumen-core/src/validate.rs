//! Server-side contact form validation.
//!
//! The browser applies the same four rules before posting
//! (`public/script.js`); the server re-applies them here as the authority.
//! All failing fields are collected so the client can surface every error in
//! a single round trip.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::contact::ContactForm;
use crate::error::ValidationError;

/// Minimum characters in a trimmed name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum characters in a trimmed message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Accepted digit count for a phone number, after stripping separators.
pub const PHONE_DIGITS: RangeInclusive<usize> = 10..=15;

// Unanchored on purpose: the address only has to contain a
// `user@host.tld`-shaped substring, matching the client-side check.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\S+@\S+\.\S+") {
        Ok(re) => re,
        Err(e) => unreachable!("email pattern is a compile-time constant: {e}"),
    }
});

/// Returns `true` if the trimmed name has at least [`MIN_NAME_CHARS`] characters.
#[must_use]
pub fn name_is_valid(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

/// Returns `true` if the address contains a `user@host.tld`-shaped substring.
#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if the number contains 10 to 15 ASCII digits once every
/// separator (spaces, dashes, parentheses, `+`) is ignored.
#[must_use]
pub fn phone_is_valid(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_DIGITS.contains(&digits)
}

/// Returns `true` if the trimmed message has at least [`MIN_MESSAGE_CHARS`] characters.
#[must_use]
pub fn message_is_valid(message: &str) -> bool {
    message.trim().chars().count() >= MIN_MESSAGE_CHARS
}

/// Validate a contact form, reporting every failing field in field order.
///
/// # Errors
/// Returns the list of [`ValidationError`]s, one per failing field, ordered
/// name, email, phone, message.
pub fn validate(form: &ContactForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !name_is_valid(&form.name) {
        errors.push(ValidationError::NameTooShort);
    }
    if !email_is_valid(&form.email) {
        errors.push(ValidationError::EmailInvalid);
    }
    if !phone_is_valid(&form.phone) {
        errors.push(ValidationError::PhoneInvalid);
    }
    if !message_is_valid(&form.message) {
        errors.push(ValidationError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
