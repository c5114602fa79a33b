//! Integration tests: the contact API contract end to end.
//!
//! Drives the real router with an in-memory mailer so every envelope the
//! browser depends on is pinned: success, validation failure, missing
//! configuration, provider failure, and the static-site fallback.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use lumen_gateway::config::{AppConfig, ENV_EMAIL_TO, ENV_PUBLIC_DIR, ENV_RESEND_API_KEY};
use lumen_gateway::routes::{create_router, AppState, DispatchState};
use lumen_mailer::{EmailMessage, Mailer, MailerError};

// ── Test mailers ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("recording mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        self.sent.lock().expect("recording mailer lock").push(message.clone());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<(), MailerError> {
        Err(MailerError::Api { status: 403, body: "API key is invalid".to_owned() })
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn test_config(public_dir: &str) -> AppConfig {
    let public_dir = public_dir.to_owned();
    AppConfig::from_lookup(move |key| match key {
        ENV_RESEND_API_KEY => Some("re_test_key".to_owned()),
        ENV_EMAIL_TO => Some("owner@lumentekno.example".to_owned()),
        ENV_PUBLIC_DIR => Some(public_dir.clone()),
        _ => None,
    })
}

fn configured_state(mailer: Arc<dyn Mailer>) -> AppState {
    let config = test_config("this-directory-does-not-exist");
    let email = config.email.clone().expect("test config must configure email");
    AppState {
        config: Arc::new(config),
        dispatch: Some(DispatchState { mailer, from: email.from, to: email.to }),
    }
}

fn unconfigured_state() -> AppState {
    AppState::from_config(AppConfig::from_lookup(|_| None))
}

fn post_contact(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request must build")
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body must be readable");
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

fn valid_body() -> String {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "phone": "+91 98765 43210",
        "message": "I would like a quote for a storefront sign.",
    })
    .to_string()
}

// ── Contact endpoint ─────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_returns_success_and_dispatches_one_email() {
    let recorder = Arc::new(RecordingMailer::default());
    let app = create_router(configured_state(recorder.clone()));

    let resp = app.oneshot(post_contact(&valid_body())).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for your message! We will get back to you soon.");

    let sent = recorder.sent();
    assert_eq!(sent.len(), 1, "exactly one email must be dispatched");
    let email = &sent[0];
    assert_eq!(email.to, "owner@lumentekno.example");
    assert_eq!(email.from, "Lumen Tekno <onboarding@resend.dev>");
    assert_eq!(email.subject, "New Contact from Asha Rao - Lumen Tekno");
    assert!(email.html.contains("asha@example.com"), "email body must include the address");
    assert!(email.html.contains("+91 98765 43210"), "email body must include the phone");
}

#[tokio::test]
async fn empty_submission_reports_every_field_error() {
    let recorder = Arc::new(RecordingMailer::default());
    let app = create_router(configured_state(recorder.clone()));

    let resp = app.oneshot(post_contact("{}")).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["errors"],
        serde_json::json!([
            "Name must be at least 2 characters long",
            "Please provide a valid email address",
            "Please provide a valid phone number (10-15 digits)",
            "Message must be at least 10 characters long",
        ])
    );
    assert!(recorder.sent().is_empty(), "no email may be dispatched for an invalid form");
}

#[tokio::test]
async fn single_bad_field_reports_only_that_error() {
    let app = create_router(configured_state(Arc::new(RecordingMailer::default())));

    let body = serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "phone": "12345",
        "message": "I would like a quote for a storefront sign.",
    })
    .to_string();
    let resp = app.oneshot(post_contact(&body)).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await;
    assert_eq!(
        body["errors"],
        serde_json::json!(["Please provide a valid phone number (10-15 digits)"])
    );
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = create_router(configured_state(Arc::new(RecordingMailer::default())));
    let resp = app.oneshot(post_contact("{not json")).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_server_returns_configuration_error_before_validating() {
    let app = create_router(unconfigured_state());

    // A body that would also fail validation: the config error must win.
    let resp = app.oneshot(post_contact("{}")).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Server configuration error. Please contact administrator.");
    assert!(body.get("errors").is_none(), "config errors carry no field errors");
}

#[tokio::test]
async fn provider_failure_returns_retry_later_envelope() {
    let app = create_router(configured_state(Arc::new(FailingMailer)));

    let resp = app.oneshot(post_contact(&valid_body())).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to send message. Please try again later.");
    let detail = body["error"].as_str().expect("error detail must be present");
    assert!(detail.contains("403"), "detail must carry the provider status: {detail}");
    assert!(detail.contains("API key is invalid"), "detail must carry the provider body");
}

// ── Health and static fallback ───────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let app = create_router(unconfigured_state());
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("request must build");
    let resp = app.oneshot(req).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Lumen Tekno API is running");
    let ts = body["timestamp"].as_str().expect("timestamp must be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(ts).is_ok(),
        "timestamp must be RFC 3339: {ts}"
    );
}

#[tokio::test]
async fn unknown_route_without_site_returns_json_404() {
    let app = create_router(configured_state(Arc::new(RecordingMailer::default())));
    let req = Request::builder().uri("/about").body(Body::empty()).expect("request must build");
    let resp = app.oneshot(req).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = json_body(resp).await;
    assert_eq!(body["message"], "Page not found");
}

fn site_fixture(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lumen-gateway-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("fixture dir must be creatable");
    std::fs::write(dir.join("index.html"), "<html><body>Lumen Tekno</body></html>")
        .expect("index must be writable");
    std::fs::write(dir.join("styles.css"), "body { margin: 0; }").expect("asset must be writable");
    dir
}

fn state_with_site(dir: &std::path::Path) -> AppState {
    let config = test_config(&dir.display().to_string());
    AppState::from_config(config)
}

#[tokio::test]
async fn root_serves_the_site_index() {
    let dir = site_fixture("index");
    let app = create_router(state_with_site(&dir));

    let req = Request::builder().uri("/").body(Body::empty()).expect("request must build");
    let resp = app.oneshot(req).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body must be readable");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Lumen Tekno"), "index content must be served");
}

#[tokio::test]
async fn assets_are_served_from_the_public_directory() {
    let dir = site_fixture("asset");
    let app = create_router(state_with_site(&dir));

    let req = Request::builder()
        .uri("/styles.css")
        .body(Body::empty())
        .expect("request must build");
    let resp = app.oneshot(req).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body must be readable");
    assert_eq!(String::from_utf8_lossy(&bytes), "body { margin: 0; }");
}

#[tokio::test]
async fn unknown_route_with_site_falls_back_to_index() {
    let dir = site_fixture("spa");
    let app = create_router(state_with_site(&dir));

    let req = Request::builder()
        .uri("/services/signage")
        .body(Body::empty())
        .expect("request must build");
    let resp = app.oneshot(req).await.expect("handler must respond");
    assert_eq!(resp.status(), StatusCode::OK, "client-side routes must serve the index");

    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("body must be readable");
    assert!(String::from_utf8_lossy(&bytes).contains("Lumen Tekno"));
}
