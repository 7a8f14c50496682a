//! Wire types matching the Thinkverse backend's JSON shapes (snake_case
//! fields, integer ids, RFC 3339 timestamps).
//!
//! Every endpoint gets an explicit schema; fields the backend only includes
//! on some variants of a record carry `#[serde(default)]` so the one type
//! covers each emitting view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Auth ─────────────────────────────────────────────────────────────────────

/// The authenticated user as returned by login/register/session-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    /// Only present in the registration response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Envelope returned by login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub message: String,
    pub user: CurrentUser,
}

/// Result of the session check, tagged by whether a session exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthCheck {
    Authenticated { authenticated: bool, user: CurrentUser },
    Anonymous { authenticated: bool },
}

impl AuthCheck {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(self) -> Option<CurrentUser> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous { .. } => None,
        }
    }
}

/// Payload of the token-issuing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfToken {
    #[serde(rename = "csrfToken")]
    pub token: String,
}

/// Plain `{"message": ...}` acknowledgement (logout, block, comment like...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

// ── Users ────────────────────────────────────────────────────────────────────

/// A full user profile as returned by the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    /// Only disclosed on the viewer's own profile.
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    pub avatar: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub is_verified: bool,
    pub is_private: bool,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
    pub replies_count: u32,
    pub likes_count: u32,
    pub media_count: u32,
    /// Zero unless viewing your own profile.
    pub saved_count: u32,
    pub is_following: bool,
    pub is_own_profile: bool,
    pub is_blocked: bool,
    pub mutual_followers_count: u32,
}

/// A user row in search results, follower/following lists and suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    /// Truncated to 100 chars by the backend; absent in follow lists.
    #[serde(default)]
    pub bio: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub followers_count: u32,
    /// Absent in suggestion rows.
    #[serde(default)]
    pub is_following: bool,
    /// Absent in follow lists.
    #[serde(default)]
    pub mutual_followers_count: u32,
}

/// Pagination descriptor attached to every paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowersPage {
    pub followers: Vec<UserSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowingPage {
    pub following: Vec<UserSummary>,
    pub pagination: Pagination,
}

/// Follow-state change from the toggle endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowToggle {
    pub message: String,
    pub is_following: bool,
    pub followers_count: u32,
}

/// Follow-state change from the non-toggling follow/unfollow endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowCount {
    pub message: String,
    pub followers_count: u32,
}

/// One entry in the current user's activity history. The `data` blob is
/// schemaless server-side, so it stays a raw JSON value here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub activity_type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPage {
    pub activities: Vec<Activity>,
    pub pagination: Pagination,
}

/// Profile fields accepted by the update endpoint. Unset fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// The profile subset echoed back after an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    pub avatar: Option<String>,
    pub is_private: bool,
    pub date_joined: DateTime<Utc>,
    pub followers_count: u32,
    pub following_count: u32,
    pub is_own_profile: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdated {
    pub message: String,
    pub user: UpdatedProfile,
}

/// Registration fields. `full_name` and `location` are optional server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ── Posts ────────────────────────────────────────────────────────────────────

/// Post author as embedded in post/reply records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A post (the backend calls top-level ones "blogs"; replies are posts with
/// `is_reply` set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    #[serde(default)]
    pub replies_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_reply: bool,
    #[serde(default)]
    pub parent_post_id: Option<i64>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_saved: bool,
}

/// A reply row from the replies endpoint (a slimmer projection than [`Post`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    #[serde(default)]
    pub is_liked: bool,
}

/// Like-state change; a pure passthrough of the backend payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub success: bool,
    pub is_liked: bool,
    pub likes_count: u32,
}

/// Save-state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveToggle {
    pub success: bool,
    pub is_saved: bool,
}

/// Envelope returned when a post is created or updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSaved {
    pub success: bool,
    pub post: Post,
}

/// Paginated post listing (explore, tag and per-user blog pages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPage {
    pub blogs: Vec<Post>,
    pub pagination: Pagination,
}

/// Unpaginated post listing (trending).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogList {
    pub blogs: Vec<Post>,
}

/// Result of a multipart image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUpload {
    pub success: bool,
    pub image_url: String,
}

/// Fields for creating a post. Reply linkage is set by
/// [`PostsApi::create_reply`](crate::api::posts::PostsApi::create_reply).
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Fields for editing a post; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

// ── Comments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: Author,
    /// Id of the blog the comment belongs to.
    pub blog: i64,
    /// Parent comment id for nested replies.
    pub parent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    #[serde(default)]
    pub replies_count: u32,
}

/// Comment listing: a result array plus a total count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPage {
    pub results: Vec<Comment>,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
}

// ── Messaging ────────────────────────────────────────────────────────────────

/// A conversation participant or message sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Preview of the most recent message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastMessage {
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub sender_username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub other_participant: Participant,
    pub last_message: Option<LastMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub sender: Participant,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Result of starting (or re-opening) a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationStarted {
    pub conversation_id: i64,
    pub message: String,
}

// ── Wire envelopes ───────────────────────────────────────────────────────────
// Single-key wrappers the backend puts around list/detail payloads; the
// resource modules unwrap these before returning.

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostsEnvelope {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostEnvelope {
    pub post: Post,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepliesEnvelope {
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub user: Profile,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SuggestionsEnvelope {
    pub suggested_users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConversationsEnvelope {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessagesEnvelope {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SentMessageEnvelope {
    pub message: Message,
}
