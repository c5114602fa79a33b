//! Contact notification rendering and dispatch for the Lumen Tekno gateway.
//!
//! Renders the five-field notification email for an accepted submission and
//! sends it through the Resend transactional email API behind the [`Mailer`]
//! port.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod mailer;
pub mod resend;
pub mod template;

pub use error::MailerError;
pub use mailer::{EmailMessage, Mailer};
pub use resend::ResendClient;
pub use template::{contact_email, contact_subject, render_contact_email};
