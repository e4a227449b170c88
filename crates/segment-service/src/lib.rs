//! 商品分群服务
//!
//! 接收自由文本规则，对镜像目录求值并返回匹配的商品子集。
//! 规则解析与评估由 segment-engine 完成，本 crate 只做 HTTP 边界。

pub mod catalog;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use state::AppState;

/// 组装服务路由
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/segments/evaluate", post(handlers::segment::evaluate))
        .route("/health", get(handlers::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, MockProductSource};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn catalog_fixture() -> Vec<Value> {
        vec![
            json!({"id": 1, "price": 60, "stock_status": "instock", "category": "Shoes"}),
            json!({"id": 2, "price": 60, "stock_status": "outofstock", "category": "Shoes"}),
            json!({"id": 3, "price": 10, "stock_status": "instock", "category": "Hats"}),
        ]
    }

    fn app_with_products() -> Router {
        let mut source = MockProductSource::new();
        source
            .expect_fetch_products()
            .returning(|| Ok(catalog_fixture()));
        app(AppState::new(Arc::new(source)))
    }

    fn evaluate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/segments/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_evaluate_returns_matching_segment() {
        let response = app_with_products()
            .oneshot(evaluate_request(
                json!({"rules": "price > 50\nstock_status = instock"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["count"], json!(1));
        assert_eq!(body["data"][0]["id"], json!(1));
        assert_eq!(body["conditions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_rule_line_is_bad_request_with_line_text() {
        let response = app_with_products()
            .oneshot(evaluate_request(json!({"rules": "price >>> 50"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!("INVALID_RULE"));
        assert!(body["message"].as_str().unwrap().contains("price >>> 50"));
    }

    #[tokio::test]
    async fn test_empty_rules_is_validation_error() {
        let response = app_with_products()
            .oneshot(evaluate_request(json!({"rules": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_whitespace_rules_is_no_conditions() {
        let response = app_with_products()
            .oneshot(evaluate_request(json!({"rules": "  \n  "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!("NO_CONDITIONS"));
    }

    #[tokio::test]
    async fn test_catalog_unavailable_maps_to_bad_gateway() {
        let mut source = MockProductSource::new();
        source
            .expect_fetch_products()
            .returning(|| Err(CatalogError::Unavailable("connection refused".into())));
        let app = app(AppState::new(Arc::new(source)));

        let response = app
            .oneshot(evaluate_request(json!({"rules": "price > 50"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["code"], json!("PRODUCT_SERVICE_UNAVAILABLE"));
    }

    #[tokio::test]
    async fn test_rule_error_short_circuits_catalog_fetch() {
        // 规则有误时不应访问商品服务
        let mut source = MockProductSource::new();
        source.expect_fetch_products().times(0);
        let app = app(AppState::new(Arc::new(source)));

        let response = app
            .oneshot(evaluate_request(json!({"rules": "garbage"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app_with_products()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["service"], json!("segment-service"));
    }
}
