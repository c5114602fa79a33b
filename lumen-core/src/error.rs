/// A contact form field that failed validation.
///
/// `Display` yields the exact message shown to the submitter; the same
/// wording is used by the browser-side checks in `public/script.js`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The trimmed name is shorter than two characters.
    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    /// The email does not contain a `user@host.tld`-shaped substring.
    #[error("Please provide a valid email address")]
    EmailInvalid,

    /// The phone number has fewer than 10 or more than 15 digits.
    #[error("Please provide a valid phone number (10-15 digits)")]
    PhoneInvalid,

    /// The trimmed message is shorter than ten characters.
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}
