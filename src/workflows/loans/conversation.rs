use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assistant;
use super::domain::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Single turn in a product conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            sent_at: Some(Utc::now()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            sent_at: Some(Utc::now()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("conversation is about product {expected}, not {actual}")]
    ProductMismatch {
        expected: ProductId,
        actual: ProductId,
    },
}

/// In-memory history for one open product conversation. Nothing is
/// persisted; dropping the session discards the history.
#[derive(Debug, Clone)]
pub struct Conversation {
    product_id: ProductId,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record the user's question and the assistant's reply, returning the reply.
    pub fn ask(&mut self, product: &Product, input: &str) -> Result<&ChatMessage, ConversationError> {
        if product.id != self.product_id {
            return Err(ConversationError::ProductMismatch {
                expected: self.product_id.clone(),
                actual: product.id.clone(),
            });
        }

        let question = input.trim();
        if question.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }

        let reply = assistant::resolve_answer(product, question);
        self.messages.push(ChatMessage::user(question));
        self.messages.push(ChatMessage::assistant(reply));

        Ok(&self.messages[self.messages.len() - 1])
    }
}
