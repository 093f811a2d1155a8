//! Conversation types and state management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ReplyCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,

    /// How the renderer should present a bot reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ReplyCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.to_string(),
            timestamp: Utc::now(),
            category: None,
        }
    }

    pub fn bot(text: &str, category: ReplyCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: text.to_string(),
            timestamp: Utc::now(),
            category: Some(category),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    pub fn with_welcome(mut self, welcome: Message) -> Self {
        self.push(welcome);
        self
    }

    /// Append to the log; messages are never edited or removed
    pub fn push(&mut self, message: Message) {
        self.updated_at = message.timestamp.max(self.updated_at);
        self.messages.push(message);
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
