//! Outbound email abstraction.
//!
//! The gateway talks to this trait, not to the Resend client directly, so
//! request handling can be exercised in tests with an in-memory mailer.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MailerError;

/// A fully rendered transactional email, ready for dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    /// Sender in `Display Name <address>` form.
    pub from: String,
    /// Recipient address.
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Port for dispatching transactional email.
///
/// Implementations must be `Send + Sync` to allow sharing across handler
/// tasks. Dispatch is a single attempt; callers do not retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch one email.
    ///
    /// # Errors
    /// Returns [`MailerError::Transport`] if the provider cannot be reached,
    /// or [`MailerError::Api`] if it rejects the request.
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError>;
}
