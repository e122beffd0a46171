use std::sync::Arc;

use tracing::info;

use super::assistant::{self, AssistantAnswer};
use super::domain::{Product, ProductId};
use super::repository::{rank_by_rate, ProductRepository, RepositoryError};
use super::views::ProductCard;

/// Service composing the catalog repository with ranking, cards, and the assistant.
pub struct ProductService<R> {
    repository: Arc<R>,
    top_picks: usize,
}

impl<R> ProductService<R>
where
    R: ProductRepository + 'static,
{
    pub fn new(repository: Arc<R>, top_picks: usize) -> Self {
        Self {
            repository,
            top_picks,
        }
    }

    /// Cheapest products first, capped at `limit` (or the configured default);
    /// the first card is the best match.
    pub fn top_picks(&self, limit: Option<usize>) -> Result<Vec<ProductCard>, ServiceError> {
        let limit = limit.unwrap_or(self.top_picks);
        let mut products = self.repository.list()?;
        rank_by_rate(&mut products);

        Ok(products
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, product)| ProductCard::from_product(product, index == 0))
            .collect())
    }

    pub fn product(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| ServiceError::ProductNotFound(id.clone()))
    }

    pub fn card(&self, id: &ProductId) -> Result<ProductCard, ServiceError> {
        let product = self.product(id)?;
        Ok(ProductCard::from_product(&product, false))
    }

    /// Answer a question about a catalog product.
    pub fn ask(&self, id: &ProductId, question: &str) -> Result<AssistantAnswer, ServiceError> {
        let product = self.product(id)?;
        let answer = assistant::answer(&product, question);
        info!(
            product_id = %id,
            topic = answer.topic.map(|topic| topic.label()).unwrap_or("key details"),
            "assistant answered"
        );
        Ok(answer)
    }
}

/// Error raised by the product service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
