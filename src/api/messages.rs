//! Direct messaging: conversations and messages.

use serde_json::json;

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{
    Conversation, ConversationStarted, ConversationsEnvelope, Message, MessagesEnvelope,
    SentMessageEnvelope,
};

/// Handle over `/api/messages/`.
#[derive(Clone, Copy)]
pub struct MessagesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> MessagesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All conversations the current user participates in.
    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        let env: ConversationsEnvelope = self.http.get("/api/messages/conversations/").await?;
        Ok(env.conversations)
    }

    /// Start a conversation with the named user, or return the existing one.
    pub async fn start_conversation(&self, username: &str) -> Result<ConversationStarted> {
        self.http
            .post_empty(&format!("/api/messages/start/{username}/"))
            .await
    }

    /// Messages in a conversation, oldest first. Fetching also marks unread
    /// messages as read server-side.
    pub async fn messages(&self, conversation_id: i64) -> Result<Vec<Message>> {
        let env: MessagesEnvelope = self
            .http
            .get(&format!("/api/messages/conversation/{conversation_id}/messages/"))
            .await?;
        Ok(env.messages)
    }

    pub async fn send(&self, conversation_id: i64, content: &str) -> Result<Message> {
        let body = json!({ "content": content });
        let env: SentMessageEnvelope = self
            .http
            .post(
                &format!("/api/messages/conversation/{conversation_id}/send/"),
                &body,
            )
            .await?;
        Ok(env.message)
    }
}
