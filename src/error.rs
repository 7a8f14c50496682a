//! Error types for the Thinkverse SDK.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP response had a non-2xx status code other than 401.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The server rejected the request with 401. The session has already
    /// been expired and the unauthorized handler has run by the time the
    /// caller sees this.
    #[error("Unauthorized")]
    Unauthorized,

    /// An error from the underlying HTTP client (transport-level: no
    /// response was received, or the response body could not be read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request was cancelled via its [`RequestScope`](crate::RequestScope)
    /// before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration could not be loaded or parsed.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configured base address is not a valid URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// A generic error string.
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
