//! Backend Config

use std::time::Duration;

use clap::Args;

/// Storefront backend connection settings.
#[derive(Debug, Clone, Args)]
pub struct BackendConfig {
    /// Backend base URL
    #[arg(long, env = "TECHMART_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Session cookie to attach to backend requests, e.g. `token=...`
    #[arg(long, env = "TECHMART_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Backend request timeout in seconds
    #[arg(long, env = "TECHMART_REQUEST_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub request_timeout_seconds: u64,
}

impl BackendConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
