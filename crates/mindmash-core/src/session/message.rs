//! Chat message types.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::command::Token;

/// A single entry in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Ordinal, unique within a session
    pub id: u64,
    /// Persona id, or `user`
    pub sender: String,
    pub content: String,
    /// Wall-clock time of creation, `hh:mm:ss AM`
    pub timestamp: String,
    #[serde(default)]
    pub is_typing: bool,
    /// Annotated form of `content` for user messages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
}

/// Insertion-ordered, in-memory chat log.
///
/// Owns id assignment so ids follow append order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns a copy of it.
    pub fn push(
        &mut self,
        sender: impl Into<String>,
        content: impl Into<String>,
        tokens: Vec<Token>,
    ) -> Message {
        self.next_id += 1;
        let message = Message {
            id: self.next_id,
            sender: sender.into(),
            content: content.into(),
            timestamp: Local::now().format("%I:%M:%S %p").to_string(),
            is_typing: false,
            tokens,
        };
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes all messages. Ids keep increasing.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
