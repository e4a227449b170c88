//! 商品目录镜像服务
//!
//! 周期性地将远端 WooCommerce 商品目录同步到内存镜像，
//! 并通过 REST API 对外提供商品列表与手动同步入口。

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod sync;
pub mod woocommerce;

use axum::Router;
use axum::routing::{get, post};
use state::AppState;

/// 组装服务路由
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/sync", post(handlers::sync_products))
        .route("/health", get(handlers::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::store::ProductStore;
    use crate::sync::SyncService;
    use crate::woocommerce::MockProductFetcher;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn seeded_state() -> AppState {
        let store = ProductStore::new();
        store.upsert(Product {
            id: 1,
            title: "Trail Running Shoes".to_string(),
            price: 89.99,
            stock_status: "instock".to_string(),
            stock_quantity: Some(12),
            category: Some("Shoes".to_string()),
            tags: vec!["summer".to_string()],
            on_sale: true,
            created_at: Utc::now(),
        });

        let mut fetcher = MockProductFetcher::new();
        fetcher.expect_fetch_page().returning(|page| match page {
            1 => Ok(vec![Product {
                id: 2,
                title: "Canvas Sneakers".to_string(),
                price: 35.0,
                stock_status: "instock".to_string(),
                stock_quantity: Some(3),
                category: Some("Shoes".to_string()),
                tags: Vec::new(),
                on_sale: false,
                created_at: Utc::now(),
            }]),
            _ => Ok(Vec::new()),
        });

        let sync = Arc::new(SyncService::new(Arc::new(fetcher), store.clone(), 10));
        AppState::new(store, sync)
    }

    #[tokio::test]
    async fn test_list_products_route() {
        let app = app(seeded_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["success"], serde_json::json!(true));
        assert_eq!(body["count"], serde_json::json!(1));
        assert_eq!(body["data"][0]["title"], serde_json::json!("Trail Running Shoes"));
    }

    #[tokio::test]
    async fn test_sync_route_reports_count() {
        let app = app(seeded_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/products/sync")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["total_synced"], serde_json::json!(1));
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = app(seeded_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
