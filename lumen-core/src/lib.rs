//! Core domain types for the Lumen Tekno contact gateway.
//!
//! Defines the contact form payload, the accepted submission record, and the
//! server-side validation rules mirrored by the browser client.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod contact;
pub mod error;
pub mod validate;

pub use contact::{ContactForm, Submission, SubmissionId};
pub use error::ValidationError;
pub use validate::validate;
