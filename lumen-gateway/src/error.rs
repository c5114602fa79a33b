//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lumen_core::ValidationError;
use lumen_mailer::MailerError;
use serde_json::json;

/// Errors that can occur during contact request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Email dispatch environment variables are incomplete.
    #[error("email dispatch is not configured")]
    Unconfigured,

    /// One or more form fields failed validation.
    #[error("validation failed")]
    Validation(Vec<ValidationError>),

    /// The email provider rejected or failed the dispatch.
    #[error(transparent)]
    Mailer(#[from] MailerError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Validation(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Validation failed",
                        "errors": messages,
                    })),
                )
                    .into_response()
            }
            GatewayError::Unconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Server configuration error. Please contact administrator.",
                })),
            )
                .into_response(),
            GatewayError::Mailer(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to send message. Please try again later.",
                    "error": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
