//! HTTP client core and the request/response pipeline.
//!
//! Every outbound call funnels through one chokepoint that runs two stages
//! around the network round-trip:
//!
//! 1. request stage: resolve a CSRF token (cookie first, endpoint fallback)
//!    and attach it under the configured header name; resolution failure
//!    never aborts the request.
//! 2. response stage: a 401 expires the session, invokes the unauthorized
//!    handler exactly once with the login route, and surfaces
//!    [`Error::Unauthorized`]; other non-2xx statuses decode the backend's
//!    error payload into [`Error::Api`]. Successful bodies pass through
//!    untransformed.
//!
//! All awaits race the client's cancellation token, so a dropped
//! [`RequestScope`](crate::RequestScope) resolves in-flight calls to
//! [`Error::Cancelled`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::cookies::CookieJar;
use crate::csrf;
use crate::error::{Error, Result};
use crate::session::SessionManager;

/// Handler invoked with the login route when the server answers 401.
pub type UnauthorizedHandler = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Low-level HTTP client shared by all resource modules.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    jar: CookieJar,
    config: Arc<ClientConfig>,
    session: Arc<SessionManager>,
    on_unauthorized: UnauthorizedHandler,
    cancel: CancellationToken,
}

impl HttpClient {
    pub fn new(config: ClientConfig, session: Arc<SessionManager>) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let jar = CookieJar::new(base);

        let client = reqwest::Client::builder()
            .default_headers({
                let mut h = reqwest::header::HeaderMap::new();
                h.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                h
            })
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_provider(jar.store())
            .build()?;

        Ok(Self {
            client,
            jar,
            config: Arc::new(config),
            session,
            on_unauthorized: Arc::new(|route| {
                debug!("unauthorized, navigation to {route} requested");
            }),
            cancel: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.jar
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub(crate) fn set_unauthorized_handler(&mut self, handler: UnauthorizedHandler) {
        self.on_unauthorized = handler;
    }

    /// Clone of this client whose requests race the given token.
    pub(crate) fn with_cancel(&self, cancel: CancellationToken) -> Self {
        let mut scoped = self.clone();
        scoped.cancel = cancel;
        scoped
    }

    /// Token every request issued through this client races against.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    // ── Verbs ────────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(self.builder(Method::GET, path)).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(self.builder(Method::GET, path).query(query)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(self.builder(Method::POST, path).json(body)).await
    }

    /// POST without a body (toggle and action endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(self.builder(Method::POST, path)).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.request(self.builder(Method::POST, path).multipart(form)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(self.builder(Method::PUT, path).json(body)).await
    }

    /// DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.builder(Method::DELETE, path);
        self.guard(async {
            self.perform(builder).await?;
            Ok(())
        })
        .await
    }

    // ── Pipeline ─────────────────────────────────────────────────────────────

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.config.base_url, path))
    }

    async fn request<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        self.guard(async {
            let resp = self.perform(builder).await?;
            if resp.status() == StatusCode::NO_CONTENT {
                return serde_json::from_value(Value::Null).map_err(Error::Json);
            }
            Ok(resp.json::<T>().await?)
        })
        .await
    }

    /// Run the pipeline stages around one round-trip, yielding the raw
    /// response on 2xx.
    async fn perform(&self, builder: RequestBuilder) -> Result<Response> {
        let builder = match csrf::resolve(&self.jar, &self.client, &self.config).await {
            Some(token) => builder.header(self.config.csrf_header.as_str(), token),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            // Cleanup precedes the redirect: subscribers woken by the
            // handler must already observe an unauthenticated session.
            debug!("401 received, expiring session");
            self.session.expire();
            (self.on_unauthorized)(&self.config.login_path);
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("message"))
                        .and_then(|e| e.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| status.to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }

    /// Race a pipeline future against the client's cancellation token.
    async fn guard<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            out = fut => out,
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
