//! Conversation controller
//!
//! The ChatEngine sits between the HTTP layer and the resolver. For every
//! user turn it:
//! 1. Picks the input text (typed message or quick action)
//! 2. Rejects empty input before anything is recorded
//! 3. Appends the user message to the conversation log
//! 4. Resolves a reply and waits out the presentation delay
//! 5. Appends the bot message and returns both records

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::replies;
use crate::conversation::Message;

use super::memory::{ConversationStore, StoreError};
use super::quick_actions::{self, QuickAction, QUICK_ACTIONS};
use super::resolver::{ReplyCategory, ResolvedReply, Resolver, Topic};

/// Request to the chat engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Text typed by the user
    #[serde(default)]
    pub message: Option<String>,

    /// Quick action label; takes precedence over `message`
    #[serde(default)]
    pub quick_action: Option<String>,

    /// Conversation to continue; a new one is started when absent
    #[serde(default)]
    pub conversation_id: Option<Uuid>,
}

impl ChatRequest {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn quick_action(label: impl Into<String>) -> Self {
        Self {
            quick_action: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn in_conversation(mut self, id: Uuid) -> Self {
        self.conversation_id = Some(id);
        self
    }
}

/// One completed user/bot turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub conversation_id: Uuid,
    pub user: Message,
    pub reply: Message,
    pub topic: Topic,
}

impl ChatExchange {
    pub fn category(&self) -> ReplyCategory {
        self.reply.category.unwrap_or(ReplyCategory::Plain)
    }
}

/// Errors from the chat engine
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Unknown quick action: {0}")]
    UnknownQuickAction(String),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(Uuid),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Artificial pause before the bot reply is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    min: Duration,
    max: Duration,
}

impl ReplyDelay {
    /// Bounds are swapped if given in the wrong order
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Uniform sample in `[min, max]`
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(800), Duration::from_millis(2000))
    }
}

/// The conversation controller
pub struct ChatEngine {
    resolver: Resolver,
    store: Arc<ConversationStore>,
    delay: ReplyDelay,
}

impl ChatEngine {
    pub fn new(resolver: Resolver, store: Arc<ConversationStore>, delay: ReplyDelay) -> Self {
        Self {
            resolver,
            store,
            delay,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        QUICK_ACTIONS
    }

    /// Stateless resolve, nothing is recorded
    pub fn resolve(&self, text: &str) -> ResolvedReply<'_> {
        self.resolver.resolve(text)
    }

    /// First bot message of a new conversation
    pub fn welcome_message(&self) -> Message {
        Message::bot(
            &replies::welcome(self.resolver.portfolio().profile()),
            ReplyCategory::Plain,
        )
    }

    /// Process one user turn
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatExchange, ChatError> {
        let text = match request.quick_action {
            Some(label) => quick_actions::find(&label)
                .ok_or(ChatError::UnknownQuickAction(label))?
                .query
                .to_string(),
            None => request.message.unwrap_or_default(),
        };

        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let conversation_id = match request.conversation_id {
            Some(id) => {
                if !self.store.contains(id).await {
                    return Err(ChatError::ConversationNotFound(id));
                }
                id
            }
            None => self.store.create(self.welcome_message()).await,
        };

        let user = Message::user(&text);
        self.store.append(conversation_id, user.clone()).await?;

        let (reply_text, category, topic) = {
            let reply = self.resolver.resolve(&text);
            (reply.text, reply.category, reply.topic)
        };

        tracing::debug!(
            %conversation_id,
            ?topic,
            ?category,
            "resolved user message"
        );

        let delay = self.delay.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let reply = Message::bot(&reply_text, category);
        self.store.append(conversation_id, reply.clone()).await?;

        Ok(ChatExchange {
            conversation_id,
            user,
            reply,
            topic,
        })
    }
}
