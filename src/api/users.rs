//! User profiles, follows, blocks, search and activity.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{
    Ack, ActivityPage, FollowCount, FollowToggle, FollowersPage, FollowingPage, Profile,
    ProfileEnvelope, ProfileUpdate, ProfileUpdated, SuggestionsEnvelope, UserPage, UserSummary,
};

/// Handle over `/api/users/`.
#[derive(Clone, Copy)]
pub struct UsersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    // ── Profiles ─────────────────────────────────────────────────────────────

    pub async fn profile(&self, username: &str) -> Result<Profile> {
        let env: ProfileEnvelope = self
            .http
            .get(&format!("/api/users/profile/{username}/"))
            .await?;
        Ok(env.user)
    }

    pub async fn my_profile(&self) -> Result<Profile> {
        let env: ProfileEnvelope = self.http.get("/api/users/profile/").await?;
        Ok(env.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<ProfileUpdated> {
        self.http.put("/api/users/profile/update/", update).await
    }

    // ── Follows ──────────────────────────────────────────────────────────────

    pub async fn toggle_follow(&self, username: &str) -> Result<FollowToggle> {
        self.http
            .post_empty(&format!("/api/users/toggle-follow/{username}/"))
            .await
    }

    /// Errors with 400 if already following; prefer [`toggle_follow`].
    ///
    /// [`toggle_follow`]: UsersApi::toggle_follow
    pub async fn follow(&self, username: &str) -> Result<FollowCount> {
        self.http
            .post_empty(&format!("/api/users/follow/{username}/"))
            .await
    }

    pub async fn unfollow(&self, username: &str) -> Result<FollowCount> {
        self.http
            .post_empty(&format!("/api/users/unfollow/{username}/"))
            .await
    }

    pub async fn followers(&self, username: &str, page: u32, limit: u32) -> Result<FollowersPage> {
        self.http
            .get_query(
                &format!("/api/users/{username}/followers/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn following(&self, username: &str, page: u32, limit: u32) -> Result<FollowingPage> {
        self.http
            .get_query(
                &format!("/api/users/{username}/following/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    // ── Discovery ────────────────────────────────────────────────────────────

    /// Search users by username, full name or bio.
    pub async fn search(&self, query: &str, page: u32, limit: u32) -> Result<UserPage> {
        self.http
            .get_query(
                "/api/users/search/",
                &[
                    ("q", query.to_string()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    pub async fn suggestions(&self, limit: u32) -> Result<Vec<UserSummary>> {
        let env: SuggestionsEnvelope = self
            .http
            .get_query("/api/users/suggestions/", &[("limit", limit.to_string())])
            .await?;
        Ok(env.suggested_users)
    }

    // ── Blocks ───────────────────────────────────────────────────────────────

    pub async fn block(&self, username: &str) -> Result<Ack> {
        self.http
            .post_empty(&format!("/api/users/block/{username}/"))
            .await
    }

    pub async fn unblock(&self, username: &str) -> Result<Ack> {
        self.http
            .post_empty(&format!("/api/users/unblock/{username}/"))
            .await
    }

    // ── Activity ─────────────────────────────────────────────────────────────

    /// The current user's activity history.
    pub async fn activity(&self, page: u32, limit: u32) -> Result<ActivityPage> {
        self.http
            .get_query(
                "/api/users/activity/",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }
}
