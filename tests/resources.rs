//! Resource module round-trips against a mock backend: path and query
//! fidelity, request body shapes, and payload passthrough.

use serde_json::json;
use thinkverse_sdk::{ClientConfig, LikeToggle, NewComment, NewPost, ProfileUpdate, SaveToggle,
    ThinkverseClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ThinkverseClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    let client = ThinkverseClient::new(config).expect("client builds");
    // Seed the CSRF cookie so calls don't hit the token endpoint.
    client.cookies().set("csrftoken", "t");
    client
}

fn post_fixture(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Understanding BSTs",
        "content": "Binary search trees explained.",
        "author": {"id": 2, "username": "ada", "avatar": "/avatars/ada.png"},
        "created_at": "2024-01-15T11:30:00Z",
        "likes_count": 5,
        "replies_count": 2,
        "comments_count": 1,
        "image_url": null,
        "media_type": "none",
        "tags": ["algorithms", "trees"],
        "is_liked": false,
        "is_saved": true
    })
}

// ── Posts ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_like_is_a_pure_passthrough() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/42/like/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "is_liked": true, "likes_count": 43
        })))
        .expect(1)
        .mount(&server)
        .await;

    let like = client.posts().toggle_like(42).await.expect("like succeeds");
    assert_eq!(
        like,
        LikeToggle { success: true, is_liked: true, likes_count: 43 }
    );
    server.verify().await;
}

#[tokio::test]
async fn toggle_save_round_trip() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/7/save/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "is_saved": false
        })))
        .mount(&server)
        .await;

    let save = client.posts().toggle_save(7).await.expect("save succeeds");
    assert_eq!(save, SaveToggle { success: true, is_saved: false });
}

#[tokio::test]
async fn timeline_unwraps_the_posts_envelope() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/blogs/posts/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"posts": [post_fixture(1), post_fixture(2)]})),
        )
        .mount(&server)
        .await;

    let posts = client.posts().timeline().await.expect("timeline succeeds");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].author.username, "ada");
    assert_eq!(posts[0].tags, vec!["algorithms", "trees"]);
    assert!(posts[0].is_saved);
    assert!(!posts[0].is_reply);
}

#[tokio::test]
async fn create_reply_sends_reply_linkage() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/create/"))
        .and(body_json(json!({
            "content": "Nice writeup!",
            "is_reply": true,
            "parent_post_id": 42
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "post": {
                "id": 99,
                "title": "",
                "content": "Nice writeup!",
                "author": {"id": 3, "username": "lin", "avatar": "/default-avatar.png"},
                "created_at": "2024-01-16T08:00:00Z",
                "likes_count": 0,
                "replies_count": 0,
                "comments_count": 0,
                "image_url": "",
                "media_type": "none",
                "tags": [],
                "is_reply": true,
                "parent_post_id": 42,
                "is_liked": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let saved = client
        .posts()
        .create_reply(42, "Nice writeup!")
        .await
        .expect("reply succeeds");
    assert!(saved.success);
    assert!(saved.post.is_reply);
    assert_eq!(saved.post.parent_post_id, Some(42));
    server.verify().await;
}

#[tokio::test]
async fn create_post_omits_unset_optional_fields() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/create/"))
        .and(body_json(json!({"content": "hello world"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "post": post_fixture(5)
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .posts()
        .create(&NewPost { content: "hello world".into(), ..Default::default() })
        .await
        .expect("create succeeds");
    server.verify().await;
}

#[tokio::test]
async fn paginated_listing_and_tag_queries() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let page = json!({
        "blogs": [post_fixture(1)],
        "pagination": {
            "current_page": 2, "total_pages": 5,
            "has_next": true, "has_previous": true, "total_count": 41
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/blogs/"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/tag/rust/"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client.posts().list(2, 10, Some("graph")).await.expect("list succeeds");
    assert!(listed.pagination.has_next);
    assert_eq!(listed.pagination.total_count, 41);

    let tagged = client.posts().by_tag("rust", 1, 10).await.expect("tag listing succeeds");
    assert_eq!(tagged.blogs.len(), 1);
    server.verify().await;
}

#[tokio::test]
async fn trending_unwraps_and_passes_limit() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/blogs/trending/"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blogs": [post_fixture(1), post_fixture(2), post_fixture(3)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let trending = client.posts().trending(3).await.expect("trending succeeds");
    assert_eq!(trending.len(), 3);
    server.verify().await;
}

#[tokio::test]
async fn delete_post_accepts_an_empty_response() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/blogs/13/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.posts().remove(13).await.expect("delete succeeds");
    server.verify().await;
}

#[tokio::test]
async fn upload_image_posts_multipart() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/upload-image/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "image_url": "/media/uploads/graph.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uploaded = client
        .posts()
        .upload_image("graph.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .expect("upload succeeds");
    assert_eq!(uploaded.image_url, "/media/uploads/graph.png");

    let requests = server.received_requests().await.expect("recording enabled");
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/api/blogs/upload-image/")
        .expect("upload recorded");
    let content_type = upload.headers["content-type"].to_str().expect("utf8 header");
    assert!(content_type.starts_with("multipart/form-data"));
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_users_query_round_trip() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/users/search/"))
        .and(query_param("q", "algo"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{
                "id": 4, "username": "algorist", "full_name": "Al Gorist",
                "bio": "sorting things", "avatar": null, "is_verified": true,
                "followers_count": 12, "is_following": false,
                "mutual_followers_count": 2
            }],
            "pagination": {
                "current_page": 1, "total_pages": 1,
                "has_next": false, "has_previous": false, "total_count": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.users().search("algo", 1, 20).await.expect("search succeeds");
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].username, "algorist");
    assert!(!page.pagination.has_next);
    server.verify().await;
}

#[tokio::test]
async fn profile_unwraps_the_user_envelope() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/users/profile/ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": 2, "username": "ada", "email": null,
                "full_name": "Ada L.", "bio": "counting machines",
                "location": "London", "website": "https://ada.dev",
                "avatar": "/avatars/ada.png",
                "date_joined": "2023-11-02T09:00:00Z",
                "last_active": "2024-01-15T11:30:00Z",
                "is_verified": true, "is_private": false,
                "followers_count": 120, "following_count": 80,
                "posts_count": 14, "replies_count": 3, "likes_count": 40,
                "media_count": 2, "saved_count": 0,
                "is_following": true, "is_own_profile": false,
                "is_blocked": false, "mutual_followers_count": 7
            }
        })))
        .mount(&server)
        .await;

    let profile = client.users().profile("ada").await.expect("profile succeeds");
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.email, None);
    assert!(profile.is_following);
    assert_eq!(profile.mutual_followers_count, 7);
}

#[tokio::test]
async fn toggle_follow_and_block_round_trips() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/users/toggle-follow/lin/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Successfully followed user",
            "is_following": true,
            "followers_count": 13
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/block/spammer/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User blocked successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let follow = client.users().toggle_follow("lin").await.expect("follow succeeds");
    assert!(follow.is_following);
    assert_eq!(follow.followers_count, 13);

    let ack = client.users().block("spammer").await.expect("block succeeds");
    assert_eq!(ack.message, "User blocked successfully");
    server.verify().await;
}

#[tokio::test]
async fn suggestions_unwrap_and_activity_page_decodes() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/users/suggestions/"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggested_users": [{
                "id": 8, "username": "knuth", "full_name": "Don K.",
                "bio": "premature optimization...", "avatar": null,
                "is_verified": true, "followers_count": 9001,
                "mutual_followers_count": 3
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/activity/"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [{
                "id": 1, "activity_type": "login",
                "timestamp": "2024-01-15T11:30:00Z",
                "data": {"registration": true}
            }],
            "pagination": {
                "current_page": 1, "total_pages": 1,
                "has_next": false, "has_previous": false, "total_count": 1
            }
        })))
        .mount(&server)
        .await;

    let suggested = client.users().suggestions(5).await.expect("suggestions succeed");
    assert_eq!(suggested[0].username, "knuth");
    // Suggestion rows carry no is_following flag; the default applies.
    assert!(!suggested[0].is_following);

    let activity = client.users().activity(1, 20).await.expect("activity succeeds");
    assert_eq!(activity.activities[0].activity_type, "login");
    assert_eq!(activity.activities[0].data, json!({"registration": true}));
}

#[tokio::test]
async fn update_profile_sends_only_set_fields() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("PUT"))
        .and(path("/api/users/profile/update/"))
        .and(body_json(json!({"bio": "new bio", "is_private": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Profile updated successfully",
            "user": {
                "id": 2, "username": "ada", "email": "ada@thinkverse.io",
                "full_name": "Ada L.", "bio": "new bio", "location": "",
                "website": "", "avatar": null, "is_private": true,
                "date_joined": "2023-11-02T09:00:00Z",
                "followers_count": 120, "following_count": 80,
                "is_own_profile": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .users()
        .update_profile(&ProfileUpdate {
            bio: Some("new bio".into()),
            is_private: Some(true),
            ..Default::default()
        })
        .await
        .expect("update succeeds");
    assert_eq!(updated.user.bio, "new bio");
    assert!(updated.user.is_private);
    server.verify().await;
}

// ── Comments ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn blog_comments_path_and_page_decode() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/blogs/1/comments/"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": 1,
                "content": "Great explanation!",
                "author": {"username": "john_dev", "id": 4},
                "blog": 1,
                "parent": null,
                "created_at": "2024-01-15T11:30:00Z",
                "likes_count": 5,
                "replies_count": 2
            }, {
                "id": 2,
                "content": "Helped a lot, thanks!",
                "author": {"username": "jane_coder", "id": 5},
                "blog": 1,
                "parent": 1,
                "created_at": "2024-01-15T12:00:00Z",
                "likes_count": 3,
                "replies_count": 0
            }],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.comments().for_blog(1, 1, 20).await.expect("comments succeed");
    assert_eq!(page.count, 2);
    assert_eq!(page.results[1].parent, Some(1));
    // Comment authors come without an avatar field.
    assert_eq!(page.results[0].author.avatar, None);
    server.verify().await;
}

#[tokio::test]
async fn create_comment_posts_content_and_parent() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/blogs/1/comments/"))
        .and(body_json(json!({"content": "Agreed.", "parent": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Comment created successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client
        .comments()
        .create(1, &NewComment { content: "Agreed.".into(), parent: Some(1) })
        .await
        .expect("comment succeeds");
    assert_eq!(ack.message, "Comment created successfully");
    server.verify().await;
}

// ── Messaging ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn conversations_handle_missing_last_message() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/messages/conversations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversations": [{
                "id": 1,
                "other_participant": {
                    "id": 3, "username": "lin", "full_name": "Lin Q.",
                    "avatar": "/default-avatar.png"
                },
                "last_message": {
                    "content": "see you then",
                    "created_at": "2024-01-15T12:00:00Z",
                    "sender_username": "lin"
                },
                "created_at": "2024-01-10T10:00:00Z",
                "updated_at": "2024-01-15T12:00:00Z"
            }, {
                "id": 2,
                "other_participant": {
                    "id": 4, "username": "john_dev", "full_name": "",
                    "avatar": "/default-avatar.png"
                },
                "last_message": null,
                "created_at": "2024-01-14T10:00:00Z",
                "updated_at": "2024-01-14T10:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let conversations = client.messages().conversations().await.expect("list succeeds");
    assert_eq!(conversations.len(), 2);
    assert_eq!(
        conversations[0].last_message.as_ref().map(|m| m.sender_username.as_str()),
        Some("lin")
    );
    assert!(conversations[1].last_message.is_none());
}

#[tokio::test]
async fn start_conversation_and_send_message() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/messages/start/lin/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversation_id": 5, "message": "Conversation created successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/messages/conversation/5/send/"))
        .and(body_json(json!({"content": "hey!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {
                "id": 11, "content": "hey!",
                "sender": {
                    "id": 1, "username": "ada", "full_name": "Ada L.",
                    "avatar": "/default-avatar.png"
                },
                "created_at": "2024-01-15T12:01:00Z",
                "is_read": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let started = client
        .messages()
        .start_conversation("lin")
        .await
        .expect("start succeeds");
    assert_eq!(started.conversation_id, 5);

    let sent = client.messages().send(5, "hey!").await.expect("send succeeds");
    assert_eq!(sent.content, "hey!");
    assert!(!sent.is_read);
    server.verify().await;
}
