use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::loans::domain::{LoanType, Product, ProductId};
use crate::workflows::loans::repository::{
    InMemoryProductRepository, ProductRepository, RepositoryError,
};
use crate::workflows::loans::{product_router, ProductService};

pub(super) fn quick_cash() -> Product {
    Product {
        name: Some("QuickCash".to_string()),
        bank: Some("ABC Bank".to_string()),
        loan_type: Some(LoanType::Personal),
        rate_apr: Some(11.0),
        min_income: Some(30000.0),
        min_credit_score: Some(700),
        tenure_min_months: Some(12),
        tenure_max_months: Some(60),
        processing_fee_pct: Some(2.0),
        prepayment_allowed: true,
        disbursal_speed: Some("fast".to_string()),
        docs_level: Some("low_docs".to_string()),
        summary: Some("Instant personal loan.".to_string()),
        ..Product::new("quick-cash")
    }
}

pub(super) fn steady_home() -> Product {
    Product {
        name: Some("Steady Home".to_string()),
        bank: Some("Harbor Housing Finance".to_string()),
        loan_type: Some(LoanType::Home),
        rate_apr: Some(8.6),
        min_income: Some(50000.0),
        min_credit_score: Some(720),
        tenure_min_months: Some(60),
        tenure_max_months: Some(360),
        ..Product::new("steady-home")
    }
}

pub(super) fn flexline() -> Product {
    Product {
        name: Some("FlexLine".to_string()),
        bank: Some("Summit Bank".to_string()),
        loan_type: Some(LoanType::CreditLine),
        rate_apr: Some(16.0),
        ..Product::new("flexline")
    }
}

pub(super) fn unrated() -> Product {
    Product {
        name: Some("Mystery Loan".to_string()),
        ..Product::new("unrated")
    }
}

pub(super) fn catalog() -> Vec<Product> {
    vec![flexline(), unrated(), quick_cash(), steady_home()]
}

pub(super) fn build_service() -> ProductService<InMemoryProductRepository> {
    ProductService::new(Arc::new(InMemoryProductRepository::new(catalog())), 5)
}

pub(super) fn router_with_service<R>(service: ProductService<R>) -> axum::Router
where
    R: ProductRepository + 'static,
{
    product_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository whose backing store is down.
pub(super) struct UnavailableRepository;

impl ProductRepository for UnavailableRepository {
    fn fetch(&self, _id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
