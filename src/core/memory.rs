//! In-memory conversation log storage
//!
//! Keeps conversations for the lifetime of the process, up to a fixed
//! capacity. When a new conversation would exceed it, the least recently
//! updated one is dropped. Logs are append-only and nothing is written to
//! disk; a restart starts fresh.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::conversation::{Conversation, Message};

/// Default number of conversations kept in memory
pub const DEFAULT_MAX_CONVERSATIONS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Conversation not found: {0}")]
    NotFound(Uuid),
}

/// Conversation store shared by all requests
#[derive(Debug)]
pub struct ConversationStore {
    conversations: RwLock<HashMap<Uuid, Conversation>>,
    capacity: usize,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONVERSATIONS)
    }

    /// Store that keeps at most `capacity` conversations (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Start a conversation seeded with the welcome message
    pub async fn create(&self, welcome: Message) -> Uuid {
        let conversation = Conversation::new().with_welcome(welcome);
        let id = conversation.id;

        let mut conversations = self.conversations.write().await;
        while conversations.len() >= self.capacity {
            let oldest = conversations
                .values()
                .min_by_key(|c| c.updated_at)
                .map(|c| c.id);

            match oldest {
                Some(evicted) => {
                    conversations.remove(&evicted);
                    tracing::debug!(%evicted, "conversation evicted");
                }
                None => break,
            }
        }

        conversations.insert(id, conversation);
        tracing::debug!(%id, total = conversations.len(), "conversation created");
        id
    }

    /// Append a message to an existing conversation
    pub async fn append(&self, id: Uuid, message: Message) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        conversation.push(message);
        Ok(())
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.conversations.read().await.contains_key(&id)
    }

    /// Number of conversations currently held
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Full copy of a conversation
    pub async fn get_conversation(&self, id: Uuid) -> Option<Conversation> {
        self.conversations.read().await.get(&id).cloned()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
