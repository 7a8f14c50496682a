//! Client configuration loaded from environment variables.
//!
//! Supports `.env` files for development and environment variables for
//! production. Precedence: env vars > .env file > defaults.

use serde::Deserialize;

use crate::error::Result;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`ThinkverseClient`](crate::ThinkverseClient).
///
/// Every field has a default suitable for local development; each can be
/// overridden with a `THINKVERSE`-prefixed environment variable
/// (`THINKVERSE_BASE_URL`, `THINKVERSE_LOGIN_PATH`, ...) or programmatically
/// via the `with_*` builders.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base address prefixed to every relative request path.
    pub base_url: String,
    /// Client-side route the unauthorized handler is invoked with on 401.
    pub login_path: String,
    /// Name of the cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Header name the resolved CSRF token is echoed back under.
    pub csrf_header: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent string sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file if present, then `THINKVERSE_*` environment
    /// variables, falling back to the defaults of [`ClientConfig::default`].
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let cfg = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("login_path", DEFAULT_LOGIN_PATH)?
            .set_default("csrf_cookie", DEFAULT_CSRF_COOKIE)?
            .set_default("csrf_header", DEFAULT_CSRF_HEADER)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("user_agent", default_user_agent())?
            .add_source(
                config::Environment::with_prefix("THINKVERSE").try_parsing(true),
            )
            .build()?;

        let mut config: ClientConfig = cfg.try_deserialize()?;
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_owned();
        self
    }

    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent().to_owned(),
        }
    }
}

fn default_user_agent() -> &'static str {
    concat!("thinkverse-sdk/", env!("CARGO_PKG_VERSION"))
}
