//! High-level `ThinkverseClient` combining the session pipeline and the
//! per-resource API surfaces.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::auth::AuthApi;
use crate::api::comments::CommentsApi;
use crate::api::messages::MessagesApi;
use crate::api::posts::PostsApi;
use crate::api::users::UsersApi;
use crate::config::ClientConfig;
use crate::cookies::CookieJar;
use crate::error::Result;
use crate::http::HttpClient;
use crate::session::SessionManager;

/// The main Thinkverse client.
///
/// ```rust,no_run
/// use thinkverse_sdk::ThinkverseClient;
///
/// #[tokio::main]
/// async fn main() -> thinkverse_sdk::Result<()> {
///     let client = ThinkverseClient::from_env()?;
///     client.auth().login("ada", "correct horse battery").await?;
///
///     for post in client.posts().timeline().await? {
///         println!("{}: {}", post.author.username, post.content);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ThinkverseClient {
    http: HttpClient,
}

impl ThinkverseClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let session = Arc::new(SessionManager::new());
        Ok(Self {
            http: HttpClient::new(config, session)?,
        })
    }

    /// Build a client from `THINKVERSE_*` environment variables (and `.env`),
    /// falling back to local-development defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Install the handler invoked with the login route whenever any request
    /// comes back 401. The host application performs the actual navigation;
    /// the default handler only logs.
    pub fn on_unauthorized(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.http.set_unauthorized_handler(Arc::new(handler));
        self
    }

    // ── Resource surfaces ────────────────────────────────────────────────────

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.http)
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(&self.http)
    }

    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(&self.http)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(&self.http)
    }

    // ── Shared state ─────────────────────────────────────────────────────────

    /// The session authority: current state plus transition notifications.
    pub fn session(&self) -> &Arc<SessionManager> {
        self.http.session()
    }

    /// The shared cookie jar (session and CSRF cookies live here).
    pub fn cookies(&self) -> &CookieJar {
        self.http.cookies()
    }

    /// Raw request layer, for endpoints this crate has no wrapper for.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Open a cancellation scope tied to a UI lifetime. Requests issued
    /// through the scope's client resolve to
    /// [`Error::Cancelled`](crate::Error::Cancelled) once the scope is
    /// cancelled or dropped.
    pub fn scope(&self) -> RequestScope {
        let token = self.http.cancel_token().child_token();
        RequestScope {
            client: Self {
                http: self.http.with_cancel(token.clone()),
            },
            token,
        }
    }
}

/// A cancellation scope over a [`ThinkverseClient`].
///
/// Dropping the scope cancels every request still in flight through it, so
/// tying a scope to a view's lifetime gives cancel-on-teardown; replacing a
/// scope on a new user action gives cancel-on-supersession.
pub struct RequestScope {
    client: ThinkverseClient,
    token: CancellationToken,
}

impl RequestScope {
    /// Client bound to this scope's lifetime.
    pub fn client(&self) -> &ThinkverseClient {
        &self.client
    }

    /// Cancel the scope explicitly.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
