//! Environment-backed gateway configuration.
//!
//! Missing email credentials do not prevent startup: the static site must
//! keep serving, so the gateway records which variables are absent and
//! answers contact submissions with a configuration error until they are
//! provided.

use std::env;
use std::path::PathBuf;

pub const ENV_RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_EMAIL_TO: &str = "EMAIL_TO";
pub const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub const ENV_LISTEN_ADDR: &str = "LUMEN_LISTEN_ADDR";
pub const ENV_PUBLIC_DIR: &str = "LUMEN_PUBLIC_DIR";

/// Resend's shared onboarding sender, used until the site's own domain is
/// verified with the provider.
pub const DEFAULT_EMAIL_FROM: &str = "Lumen Tekno <onboarding@resend.dev>";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Gateway configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    /// Directory the static marketing site is served from.
    pub public_dir: PathBuf,
    /// Present only when every variable required for dispatch is set.
    pub email: Option<EmailConfig>,
    /// Names of required dispatch variables that were not set.
    pub missing: Vec<&'static str>,
}

/// Credentials and addressing for notification dispatch.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_key: String,
    pub to: String,
    pub from: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Blank values
    /// are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = get(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let public_dir =
            get(ENV_PUBLIC_DIR).map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        let api_key = get(ENV_RESEND_API_KEY);
        let to = get(ENV_EMAIL_TO);
        let from = get(ENV_EMAIL_FROM).unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_owned());

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push(ENV_RESEND_API_KEY);
        }
        if to.is_none() {
            missing.push(ENV_EMAIL_TO);
        }

        let email = match (api_key, to) {
            (Some(api_key), Some(to)) => Some(EmailConfig { api_key, to, from }),
            _ => None,
        };

        Self { listen_addr, public_dir, email, missing }
    }
}
