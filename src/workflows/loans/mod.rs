//! Loan product dashboard: catalog ranking, eligibility badges, and the
//! keyword-matched product assistant.

pub mod assistant;
pub mod badges;
pub mod conversation;
pub mod domain;
pub mod repository;
pub mod router;
mod sample;
pub mod service;
pub mod views;


pub use assistant::{
    answer, classify, resolve_answer, AssistantAnswer, Topic, ASSISTANT_UNAVAILABLE,
};
pub use badges::{badge_labels, derive_badges, Badge, MAX_BADGES};
pub use conversation::{ChatMessage, ChatRole, Conversation, ConversationError};
pub use domain::{LoanType, Product, ProductId, MISSING_VALUE};
pub use repository::{rank_by_rate, InMemoryProductRepository, ProductRepository, RepositoryError};
pub use router::{product_router, AskRequest};
pub use sample::sample_products;
pub use service::{ProductService, ServiceError};
pub use views::ProductCard;
