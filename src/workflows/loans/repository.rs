use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::warn;

use super::domain::{Product, ProductId};
use super::sample::sample_products;

/// Read access to the product catalog so the service can run against any store.
pub trait ProductRepository: Send + Sync {
    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    fn list(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Immutable catalog snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// Duplicate ids keep their first record.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|product| {
                let fresh = seen.insert(product.id.clone());
                if !fresh {
                    warn!(product_id = %product.id, "duplicate product id ignored");
                }
                fresh
            })
            .collect();
        Self { products }
    }

    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}

/// Order by APR ascending. Products without a rate go last; ties keep their
/// catalog order.
pub fn rank_by_rate(products: &mut [Product]) {
    products.sort_by(|left, right| compare_rates(left.rate_apr, right.rate_apr));
}

fn compare_rates(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
