//! Comments and comment replies.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{Ack, Comment, CommentPage, NewComment};

/// Handle over `/api/blogs/{id}/comments/` and `/api/comments/`.
#[derive(Clone, Copy)]
pub struct CommentsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn for_blog(&self, blog_id: i64, page: u32, limit: u32) -> Result<CommentPage> {
        self.http
            .get_query(
                &format!("/api/blogs/{blog_id}/comments/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn create(&self, blog_id: i64, comment: &NewComment) -> Result<Ack> {
        self.http
            .post(&format!("/api/blogs/{blog_id}/comments/"), comment)
            .await
    }

    pub async fn get(&self, comment_id: i64) -> Result<Comment> {
        self.http.get(&format!("/api/comments/{comment_id}/")).await
    }

    pub async fn update(&self, comment_id: i64, content: &str) -> Result<Comment> {
        let body = serde_json::json!({ "content": content });
        self.http
            .put(&format!("/api/comments/{comment_id}/"), &body)
            .await
    }

    pub async fn remove(&self, comment_id: i64) -> Result<()> {
        self.http.delete(&format!("/api/comments/{comment_id}/")).await
    }

    pub async fn toggle_like(&self, comment_id: i64) -> Result<Ack> {
        self.http
            .post_empty(&format!("/api/comments/{comment_id}/like/"))
            .await
    }

    pub async fn reply(&self, comment_id: i64, content: &str) -> Result<Comment> {
        let body = serde_json::json!({ "content": content });
        self.http
            .post(&format!("/api/comments/{comment_id}/replies/"), &body)
            .await
    }

    pub async fn replies(&self, comment_id: i64, page: u32, limit: u32) -> Result<CommentPage> {
        self.http
            .get_query(
                &format!("/api/comments/{comment_id}/replies/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn by_user(&self, user_id: i64, page: u32, limit: u32) -> Result<CommentPage> {
        self.http
            .get_query(
                &format!("/api/comments/user/{user_id}/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }
}
