//! HTML rendering for the contact notification email.

use chrono::{DateTime, FixedOffset, Utc};
use lumen_core::Submission;

use crate::mailer::EmailMessage;

/// Offset for Indian Standard Time. IST has no daylight saving, so a fixed
/// offset is exact year-round.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn ist() -> FixedOffset {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(offset) => offset,
        None => unreachable!("IST offset is a constant within range"),
    }
}

/// Escape a user-controlled value for interpolation into HTML.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Format the submitted-at timestamp as the site has always shown it:
/// Indian Standard Time, `d/m/yyyy, h:mm:ss am|pm`.
#[must_use]
pub fn format_submitted_at(received_at: DateTime<Utc>) -> String {
    received_at
        .with_timezone(&ist())
        .format("%-d/%-m/%Y, %-I:%M:%S %P")
        .to_string()
}

/// Subject line for a contact notification.
#[must_use]
pub fn contact_subject(submission: &Submission) -> String {
    format!("New Contact from {} - Lumen Tekno", submission.name)
}

/// Render the five-field notification body: name, email, phone, submitted-at
/// date, and the message with newlines rewritten to `<br>`.
#[must_use]
pub fn render_contact_email(submission: &Submission) -> String {
    let message_html = escape_html(&submission.message).replace('\n', "<br>");

    format!(
        r#"
    <h2>New Contact Form Submission</h2>
    <hr>
    <h3>Customer Details</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Submitted:</strong> {submitted}</p>

    <h3>Message</h3>
    <div style="background-color: #f8f9fa; padding: 15px; border-left: 4px solid #007bff;">
      {message_html}
    </div>

    <hr>
    <p><em>This message was sent through the Lumen Tekno website contact form.</em></p>
  "#,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        phone = escape_html(&submission.phone),
        submitted = format_submitted_at(submission.received_at),
    )
}

/// Assemble the complete notification email for a submission.
#[must_use]
pub fn contact_email(from: &str, to: &str, submission: &Submission) -> EmailMessage {
    EmailMessage {
        from: from.to_owned(),
        to: to.to_owned(),
        subject: contact_subject(submission),
        html: render_contact_email(submission),
    }
}
