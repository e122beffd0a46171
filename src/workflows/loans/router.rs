use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use super::assistant::ASSISTANT_UNAVAILABLE;
use super::domain::ProductId;
use super::repository::ProductRepository;
use super::service::{ProductService, ServiceError};
use super::views::ProductCard;

/// Payload posted by the product chat panel.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Earlier turns of the chat panel. Accepted in any shape and not consulted.
    #[serde(default)]
    pub history: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopPicksQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router builder exposing the dashboard listing and the product assistant.
pub fn product_router<R>(service: Arc<ProductService<R>>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new()
        .route("/api/v1/products", get(top_picks_handler::<R>))
        .route("/api/v1/products/:product_id", get(card_handler::<R>))
        .route("/api/ai/ask", post(ask_handler::<R>))
        .with_state(service)
}

pub(crate) async fn top_picks_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<TopPicksQuery>,
) -> Response
where
    R: ProductRepository + 'static,
{
    match service.top_picks(query.limit) {
        Ok(cards) => (StatusCode::OK, axum::Json(cards)).into_response(),
        Err(err) => {
            error!(error = %err, "top picks unavailable, serving an empty list");
            (StatusCode::OK, axum::Json(Vec::<ProductCard>::new())).into_response()
        }
    }
}

pub(crate) async fn card_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    Path(product_id): Path<String>,
) -> Response
where
    R: ProductRepository + 'static,
{
    let id = ProductId(product_id);
    match service.card(&id) {
        Ok(card) => (StatusCode::OK, axum::Json(card)).into_response(),
        Err(err) => product_lookup_failed(&id, err),
    }
}

pub(crate) async fn ask_handler<R>(
    State(service): State<Arc<ProductService<R>>>,
    payload: Result<axum::Json<AskRequest>, JsonRejection>,
) -> Response
where
    R: ProductRepository + 'static,
{
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable ask payload");
            let payload = json!({
                "answer": ASSISTANT_UNAVAILABLE,
            });
            return (StatusCode::OK, axum::Json(payload)).into_response();
        }
    };

    let (Some(product_id), Some(message)) = (
        present(request.product_id),
        present(request.message),
    ) else {
        let payload = json!({
            "error": "productId and message are required",
        });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let id = ProductId(product_id);
    tracing::debug!(
        product_id = %id,
        history_len = request.history.as_array().map_or(0, Vec::len),
        "ask received"
    );

    match service.ask(&id, &message) {
        Ok(answer) => {
            let payload = json!({
                "answer": answer.text,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => product_lookup_failed(&id, err),
    }
}

/// Only an absent or empty field counts as missing; whitespace is a question.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn product_lookup_failed(id: &ProductId, err: ServiceError) -> Response {
    match &err {
        ServiceError::ProductNotFound(_) => warn!(product_id = %id, "product not found"),
        ServiceError::Repository(source) => {
            error!(product_id = %id, error = %source, "product fetch failed")
        }
    }
    let payload = json!({
        "error": "Product not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
