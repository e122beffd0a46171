use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::loans::router::{ask_handler, AskRequest};
use crate::workflows::loans::{InMemoryProductRepository, ProductService, ASSISTANT_UNAVAILABLE};

fn ask_request(body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post("/api/ai/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn ask_route_answers_known_product() {
    let router = router_with_service(build_service());

    let response = router
        .oneshot(ask_request(json!({
            "productId": "quick-cash",
            "message": "What's the APR?",
            "history": [{ "role": "user", "content": "What's the APR?" }]
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["answer"],
        "QuickCash from ABC Bank has an APR of 11%."
    );
}

#[tokio::test]
async fn ask_route_ignores_history_it_does_not_model() {
    for history in [
        json!([{ "role": "system", "content": "x" }]),
        json!([{ "speaker": "bot" }, 42]),
        json!("free text"),
    ] {
        let router = router_with_service(build_service());
        let response = router
            .oneshot(ask_request(json!({
                "productId": "quick-cash",
                "message": "What's the APR?",
                "history": history
            })))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(
            payload["answer"],
            "QuickCash from ABC Bank has an APR of 11%."
        );
    }
}

#[tokio::test]
async fn ask_route_answers_whitespace_message_with_key_details() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(ask_request(json!({ "productId": "quick-cash", "message": "   " })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let answer = payload["answer"].as_str().expect("answer text");
    assert!(answer.starts_with("Here are the key details for QuickCash from ABC Bank:"));
}

#[tokio::test]
async fn ask_route_requires_product_and_message() {
    for body in [
        json!({ "message": "apr?" }),
        json!({ "productId": "quick-cash" }),
        json!({ "productId": "quick-cash", "message": "" }),
        json!({}),
    ] {
        let router = router_with_service(build_service());
        let response = router.oneshot(ask_request(body)).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"], "productId and message are required");
    }
}

#[tokio::test]
async fn ask_route_returns_not_found_for_unknown_product() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(ask_request(json!({ "productId": "ghost", "message": "apr?" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Product not found");
}

#[tokio::test]
async fn ask_route_degrades_on_unreadable_payload() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(
            Request::post("/api/ai/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["answer"], ASSISTANT_UNAVAILABLE);
}

#[tokio::test]
async fn ask_handler_maps_repository_failure_to_not_found() {
    let service = Arc::new(ProductService::new(Arc::new(UnavailableRepository), 5));
    let request = AskRequest {
        product_id: Some("quick-cash".to_string()),
        message: Some("apr?".to_string()),
        history: serde_json::Value::Null,
    };

    let response = ask_handler::<UnavailableRepository>(State(service), Ok(axum::Json(request))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn products_route_lists_ranked_cards() {
    let router = router_with_service(build_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/products?limit=2")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let cards = payload.as_array().expect("card list");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["id"], "steady-home");
    assert_eq!(cards[0]["is_best_match"], true);
    assert_eq!(cards[1]["badges"][0], "Low APR");
}

#[tokio::test]
async fn products_route_serves_empty_list_on_store_outage() {
    let router = router_with_service(ProductService::new(Arc::new(UnavailableRepository), 5));
    let response = router
        .oneshot(
            Request::get("/api/v1/products")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!([]));
}

#[tokio::test]
async fn product_route_returns_card_or_not_found() {
    let service = ProductService::new(
        Arc::new(InMemoryProductRepository::new(catalog())),
        5,
    );
    let router = router_with_service(service);

    let found = router
        .clone()
        .oneshot(
            Request::get("/api/v1/products/flexline")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(found.status(), StatusCode::OK);
    let payload = read_json_body(found).await;
    assert_eq!(payload["type_label"], "CREDIT_LINE");
    assert_eq!(payload["badges"][0], "Flexible Credit");

    let missing = router
        .oneshot(
            Request::get("/api/v1/products/ghost")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
