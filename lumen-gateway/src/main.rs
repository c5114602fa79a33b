//! Entry point for the `lumen-gateway` HTTP server.

use lumen_gateway::{config::AppConfig, routes::{create_router, AppState}};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if !config.missing.is_empty() {
        warn!(
            missing = ?config.missing,
            "email dispatch disabled; contact submissions will fail until these are set"
        );
    }

    let state = AppState::from_config(config);
    let app = create_router(state.clone());

    let listener = match tokio::net::TcpListener::bind(&state.config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %state.config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %state.config.listen_addr,
        public_dir = %state.config.public_dir.display(),
        "lumen-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
