//! Keyword-matched product assistant.
//!
//! Questions are lowercased and checked against an ordered trigger table; the
//! first topic with a matching trigger renders a templated answer from the
//! product record. Unmatched questions get the full key-details summary.

mod templates;
mod topics;


pub use topics::Topic;

use super::domain::Product;
use topics::TOPIC_RULES;
use tracing::debug;

/// Shown by the request boundary when the assistant cannot answer at all.
pub const ASSISTANT_UNAVAILABLE: &str = "Our assistant is temporarily unavailable. You can still use the details above to decide: check the APR, minimum income, minimum credit score, tenure, and tags like 'Low APR' or 'Prepayment Allowed'.";

/// Resolved answer with the topic that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantAnswer {
    pub topic: Option<Topic>,
    pub text: String,
}

impl AssistantAnswer {
    pub fn is_fallback(&self) -> bool {
        self.topic.is_none()
    }
}

/// First topic whose triggers occur in the question, if any.
pub fn classify(question: &str) -> Option<Topic> {
    let normalized = question.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.topic)
}

/// Answer a free-text question about `product`. Always produces text.
pub fn answer(product: &Product, question: &str) -> AssistantAnswer {
    let normalized = question.to_lowercase();
    match TOPIC_RULES.iter().find(|rule| rule.matches(&normalized)) {
        Some(rule) => {
            debug!(product_id = %product.id, topic = ?rule.topic, "assistant topic matched");
            AssistantAnswer {
                topic: Some(rule.topic),
                text: (rule.render)(product),
            }
        }
        None => {
            debug!(product_id = %product.id, "assistant fell back to key details");
            AssistantAnswer {
                topic: None,
                text: templates::key_details(product),
            }
        }
    }
}

pub fn resolve_answer(product: &Product, question: &str) -> String {
    answer(product, question).text
}
