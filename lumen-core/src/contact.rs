//! Contact form payload and the accepted submission record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw contact form payload as posted by the browser.
///
/// Every field defaults to the empty string so that a body with missing keys
/// still deserializes and validation can report each failing field in one
/// pass, instead of the JSON layer rejecting the request on the first absent
/// key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Unique identifier for an accepted contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Creates a new random `SubmissionId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner `Uuid`.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SubmissionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A contact submission that has passed validation.
///
/// Fields are stored trimmed; `received_at` is the server-side wall-clock
/// time the submission was accepted and is what the notification email
/// reports as the submitted-at date.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    /// Build a submission from a form that has already passed validation,
    /// stamped with the current time.
    #[must_use]
    pub fn from_form(form: &ContactForm) -> Self {
        Self::from_form_at(form, Utc::now())
    }

    /// Build a submission with an explicit timestamp.
    #[must_use]
    pub fn from_form_at(form: &ContactForm, received_at: DateTime<Utc>) -> Self {
        Self {
            id: SubmissionId::new(),
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            phone: form.phone.trim().to_owned(),
            message: form.message.trim().to_owned(),
            received_at,
        }
    }
}
