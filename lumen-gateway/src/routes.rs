//! Axum route handlers for the Lumen Tekno contact API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use lumen_core::{validate, ContactForm, Submission};
use lumen_mailer::{contact_email, Mailer, ResendClient};

use crate::{config::AppConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Mailer plus addressing, present only when dispatch is configured.
#[derive(Clone)]
pub struct DispatchState {
    pub mailer: Arc<dyn Mailer>,
    pub from: String,
    pub to: String,
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dispatch: Option<DispatchState>,
}

impl AppState {
    /// Build state from configuration, wiring a [`ResendClient`] when the
    /// dispatch credentials are present.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let dispatch = config.email.as_ref().map(|email| DispatchState {
            mailer: Arc::new(ResendClient::new(email.api_key.clone())) as Arc<dyn Mailer>,
            from: email.from.clone(),
            to: email.to.clone(),
        });
        Self { config: Arc::new(config), dispatch }
    }
}

// ── Request / response types ──────────────────────────────────────────────────

/// Success envelope for an accepted submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response for the liveness probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
///
/// API routes are matched first; everything else is served from the public
/// directory with a single-page fallback to `index.html`.
pub fn create_router(state: AppState) -> Router {
    let spa = get(spa_fallback).with_state(state.clone());
    let static_site = ServeDir::new(&state.config.public_dir).fallback(spa);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/contact", post(submit_contact))
        .with_state(state)
        .fallback_service(static_site)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            message: "Lumen Tekno API is running",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}

/// `POST /api/contact` — validate a submission and dispatch the notification
/// email.
///
/// The configuration check runs before validation so an unconfigured server
/// never reports field errors it cannot act on.
///
/// # Errors
/// Returns [`GatewayError::Unconfigured`] when the email environment is
/// incomplete, [`GatewayError::Validation`] when any field fails its rule,
/// and [`GatewayError::Mailer`] when the provider refuses the dispatch.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, GatewayError> {
    let Some(dispatch) = state.dispatch.as_ref() else {
        tracing::error!(
            missing = ?state.config.missing,
            "contact submission received while email dispatch is unconfigured"
        );
        return Err(GatewayError::Unconfigured);
    };

    validate(&form).map_err(GatewayError::Validation)?;

    let submission = Submission::from_form(&form);
    info!(id = %submission.id, email = %submission.email, "contact form accepted");

    let message = contact_email(&dispatch.from, &dispatch.to, &submission);
    dispatch.mailer.send(&message).await?;

    info!(id = %submission.id, "contact notification dispatched");
    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: "Thank you for your message! We will get back to you soon.",
        }),
    ))
}

/// Fallback for paths with no matching file: serve the site's `index.html`
/// so client-side routing works, or a JSON 404 when the site has none.
pub async fn spa_fallback(State(state): State<AppState>) -> Response {
    let index = state.config.public_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(body) => Html(body).into_response(),
        Err(_) => {
            (StatusCode::NOT_FOUND, Json(serde_json::json!({"message": "Page not found"})))
                .into_response()
        }
    }
}
