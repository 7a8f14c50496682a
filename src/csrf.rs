//! CSRF token resolution: cookie first, token endpoint as fallback.
//!
//! Runs inside request setup, so it never surfaces an error to the caller:
//! if no token can be resolved the request goes out without the header and
//! the server's own rejection is authoritative.

use reqwest::Client;
use tracing::warn;

use crate::config::ClientConfig;
use crate::cookies::CookieJar;
use crate::types::CsrfToken;

/// Path of the token-issuing endpoint.
pub const CSRF_ENDPOINT: &str = "/api/users/csrf/";

/// Resolve a CSRF token for an outbound request.
///
/// Prefers the locally cached cookie; falls back to a fetch against the
/// token-issuing endpoint (which also lands the cookie in the jar for
/// subsequent requests). Returns `None` if neither source yields a token.
pub async fn resolve(jar: &CookieJar, client: &Client, config: &ClientConfig) -> Option<String> {
    if let Some(token) = jar.get(&config.csrf_cookie) {
        return Some(token);
    }

    match fetch(client, &config.base_url).await {
        Ok(token) => Some(token),
        Err(e) => {
            warn!("failed to fetch CSRF token: {e}");
            None
        }
    }
}

async fn fetch(client: &Client, base_url: &str) -> Result<String, reqwest::Error> {
    let resp = client
        .get(format!("{base_url}{CSRF_ENDPOINT}"))
        .send()
        .await?
        .error_for_status()?;
    let payload: CsrfToken = resp.json().await?;
    Ok(payload.token)
}
