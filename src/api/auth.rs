//! Authentication endpoints. The only module besides the 401 response stage
//! that transitions the [`SessionManager`](crate::SessionManager).

use serde_json::json;

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{Ack, AuthCheck, AuthSession, NewUser};

/// Handle over `/api/users/auth/`.
#[derive(Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Register a new account. The backend logs the user straight in, so a
    /// successful registration also establishes the session.
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthSession> {
        let auth: AuthSession = self.http.post("/api/users/auth/register/", new_user).await?;
        self.http.session().establish(auth.user.clone());
        Ok(auth)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        let body = json!({ "username": username, "password": password });
        let auth: AuthSession = self.http.post("/api/users/auth/login/", &body).await?;
        self.http.session().establish(auth.user.clone());
        Ok(auth)
    }

    /// Log out. Local session state is cleared even if the network call
    /// fails: the server-side session may already be gone, and holding on
    /// to a phantom login is the worse failure.
    pub async fn logout(&self) -> Result<Ack> {
        let result = self.http.post_empty("/api/users/auth/logout/").await;
        self.http.session().clear();
        result
    }

    /// Check whether the cookie session is still recognized server-side and
    /// sync the session manager with the answer. Drives the startup
    /// authenticated/unauthenticated switch.
    pub async fn check(&self) -> Result<AuthCheck> {
        let check: AuthCheck = self.http.get("/api/users/auth/check/").await?;
        match &check {
            AuthCheck::Authenticated { user, .. } => self.http.session().establish(user.clone()),
            AuthCheck::Anonymous { .. } => self.http.session().expire(),
        }
        Ok(check)
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<Ack> {
        let body = json!({ "old_password": old_password, "new_password": new_password });
        self.http.post("/api/users/auth/change-password/", &body).await
    }
}
