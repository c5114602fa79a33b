//! Resend HTTP API client.
//!
//! Resend exposes transactional sending as `POST /emails` with a bearer key
//! and a JSON body; a success response carries the provider-assigned email
//! id. One request per dispatch, no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MailerError;
use crate::mailer::{EmailMessage, Mailer};

/// Production Resend API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the Resend transactional email API.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Wire shape of a Resend send request. `to` is always a list on the wire
/// even though this site only ever notifies one recipient.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

impl ResendClient {
    /// Create a client against the production Resend endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint.
    #[must_use]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl Mailer for ResendClient {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendRequest {
            from: &message.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Api { status: status.as_u16(), body });
        }

        let sent: SendResponse = response.json().await?;
        info!(email_id = %sent.id, "email dispatched via Resend");
        Ok(())
    }
}
