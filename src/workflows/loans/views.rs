use serde::Serialize;

use super::badges::badge_labels;
use super::domain::{display_count, display_decimal, Product, ProductId};

/// Dashboard card for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub bank: String,
    pub type_label: String,
    pub apr_label: String,
    pub tenure_label: String,
    pub min_income_label: String,
    pub min_credit_score: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub badges: Vec<String>,
    pub is_best_match: bool,
}

impl ProductCard {
    pub fn from_product(product: &Product, is_best_match: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.display_name().to_string(),
            bank: product.display_bank().to_string(),
            type_label: product.display_type().to_uppercase(),
            apr_label: format!("{}%", display_decimal(product.rate_apr)),
            tenure_label: format!(
                "{}–{} months",
                display_count(product.tenure_min_months),
                display_count(product.tenure_max_months)
            ),
            min_income_label: format!("₹{}", display_decimal(product.min_income)),
            min_credit_score: display_count(product.min_credit_score),
            summary: product
                .summary
                .as_ref()
                .filter(|summary| !summary.trim().is_empty())
                .cloned(),
            badges: badge_labels(product),
            is_best_match,
        }
    }
}
