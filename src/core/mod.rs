//! Core chat components
//!
//! The resolver turns text into replies; the chat engine records user and bot
//! turns around it.

mod chat;
mod memory;
mod quick_actions;
mod resolver;

pub use chat::{ChatEngine, ChatError, ChatRequest, ReplyDelay};
pub use memory::{ConversationStore, DEFAULT_MAX_CONVERSATIONS};
pub use quick_actions::QuickAction;
pub use resolver::{MatchMode, ReplyCategory, ReplyPayload, Resolver, Topic};
