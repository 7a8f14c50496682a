//! Posts ("blogs" to the backend): timeline, CRUD, likes, saves, tags,
//! trending and media upload.

use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{
    BlogList, BlogPage, ImageUpload, LikeToggle, NewPost, Post, PostEnvelope, PostSaved,
    PostUpdate, PostsEnvelope, RepliesEnvelope, Reply, SaveToggle,
};

/// Handle over `/api/blogs/`.
#[derive(Clone, Copy)]
pub struct PostsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PostsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    // ── Create / edit ────────────────────────────────────────────────────────

    pub async fn create(&self, new_post: &NewPost) -> Result<PostSaved> {
        self.http.post("/api/blogs/create/", new_post).await
    }

    /// Create a reply to an existing post.
    pub async fn create_reply(&self, parent_post_id: i64, content: &str) -> Result<PostSaved> {
        let body = json!({
            "content": content,
            "is_reply": true,
            "parent_post_id": parent_post_id,
        });
        self.http.post("/api/blogs/create/", &body).await
    }

    pub async fn update(&self, post_id: i64, update: &PostUpdate) -> Result<PostSaved> {
        self.http.put(&format!("/api/blogs/{post_id}/"), update).await
    }

    pub async fn remove(&self, post_id: i64) -> Result<()> {
        self.http.delete(&format!("/api/blogs/{post_id}/")).await
    }

    /// Upload an image for embedding in a post (multipart; the JSON default
    /// content-type is overridden for this one call).
    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<ImageUpload> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(mime.essence_str())?;
        let form = Form::new().part("image", part);
        self.http.post_multipart("/api/blogs/upload-image/", form).await
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    /// All top-level posts, newest first.
    pub async fn timeline(&self) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self.http.get("/api/blogs/posts/").await?;
        Ok(env.posts)
    }

    pub async fn get(&self, post_id: i64) -> Result<Post> {
        let env: PostEnvelope = self.http.get(&format!("/api/blogs/{post_id}/")).await?;
        Ok(env.post)
    }

    pub async fn replies(&self, post_id: i64) -> Result<Vec<Reply>> {
        let env: RepliesEnvelope = self
            .http
            .get(&format!("/api/blogs/{post_id}/replies/"))
            .await?;
        Ok(env.replies)
    }

    /// Paginated listing with optional full-text search.
    pub async fn list(&self, page: u32, limit: u32, search: Option<&str>) -> Result<BlogPage> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        self.http.get_query("/api/blogs/", &query).await
    }

    pub async fn by_tag(&self, tag: &str, page: u32, limit: u32) -> Result<BlogPage> {
        self.http
            .get_query(
                &format!("/api/blogs/tag/{tag}/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn trending(&self, limit: u32) -> Result<Vec<Post>> {
        let env: BlogList = self
            .http
            .get_query("/api/blogs/trending/", &[("limit", limit.to_string())])
            .await?;
        Ok(env.blogs)
    }

    // ── Per-user sections ────────────────────────────────────────────────────

    pub async fn user_posts(&self, user_id: i64) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self
            .http
            .get(&format!("/api/blogs/user/{user_id}/posts/"))
            .await?;
        Ok(env.posts)
    }

    pub async fn user_blogs(&self, user_id: i64, page: u32, limit: u32) -> Result<BlogPage> {
        self.http
            .get_query(
                &format!("/api/blogs/user/{user_id}/"),
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn liked_by(&self, username: &str) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self
            .http
            .get(&format!("/api/blogs/user/{username}/likes/"))
            .await?;
        Ok(env.posts)
    }

    pub async fn replies_by(&self, username: &str) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self
            .http
            .get(&format!("/api/blogs/user/{username}/replies/"))
            .await?;
        Ok(env.posts)
    }

    pub async fn media_by(&self, username: &str) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self
            .http
            .get(&format!("/api/blogs/user/{username}/media/"))
            .await?;
        Ok(env.posts)
    }

    // ── Likes / saves ────────────────────────────────────────────────────────

    pub async fn toggle_like(&self, post_id: i64) -> Result<LikeToggle> {
        self.http
            .post_empty(&format!("/api/blogs/{post_id}/like/"))
            .await
    }

    pub async fn toggle_save(&self, post_id: i64) -> Result<SaveToggle> {
        self.http
            .post_empty(&format!("/api/blogs/{post_id}/save/"))
            .await
    }

    /// The current user's saved posts.
    pub async fn saved(&self) -> Result<Vec<Post>> {
        let env: PostsEnvelope = self.http.get("/api/blogs/saved/").await?;
        Ok(env.posts)
    }
}
