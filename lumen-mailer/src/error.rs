//! Error types for the mailer crate.

/// Errors that can occur while dispatching a notification email.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MailerError {
    /// The provider could not be reached or the response could not be read.
    #[error("email provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("email provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
}
