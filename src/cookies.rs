//! Named-cookie access over the client's shared cookie jar.
//!
//! The jar is the client-side cookie store: the session and CSRF cookies the
//! backend sets land here, and every outbound request reads from it.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// Read/write view over the shared [`reqwest::cookie::Jar`], scoped to the
/// client's base URL.
#[derive(Clone)]
pub struct CookieJar {
    inner: Arc<Jar>,
    base: Url,
}

impl CookieJar {
    pub(crate) fn new(base: Url) -> Self {
        Self {
            inner: Arc::new(Jar::default()),
            base,
        }
    }

    /// Handle for wiring the jar into a `reqwest::Client` as its
    /// `cookie_provider`.
    pub(crate) fn store(&self) -> Arc<Jar> {
        Arc::clone(&self.inner)
    }

    /// Returns the decoded value of the named cookie, or `None` if no such
    /// cookie is stored for the base URL. First match wins.
    pub fn get(&self, name: &str) -> Option<String> {
        let header = self.inner.cookies(&self.base)?;
        let raw = header.to_str().ok()?;
        raw.split(';').find_map(|pair| {
            let parsed = cookie::Cookie::parse_encoded(pair.trim()).ok()?;
            (parsed.name() == name).then(|| parsed.value().to_owned())
        })
    }

    /// Stores a cookie scoped to the base URL. Used by bootstrap flows and
    /// tests; normal operation fills the jar from `Set-Cookie` headers.
    pub fn set(&self, name: &str, value: &str) {
        self.inner.add_cookie_str(&format!("{name}={value}"), &self.base);
    }
}

impl std::fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieJar").field("base", &self.base.as_str()).finish()
    }
}
