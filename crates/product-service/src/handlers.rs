//! 商品服务 HTTP 处理器

use crate::error::ProductError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

/// GET /api/products — 列出镜像中的全部商品
pub async fn list_products(State(state): State<AppState>) -> Json<Value> {
    let products = state.store.list();
    Json(json!({
        "success": true,
        "count": products.len(),
        "data": products
    }))
}

/// POST /api/products/sync — 触发一次全量同步
pub async fn sync_products(State(state): State<AppState>) -> Result<Json<Value>, ProductError> {
    let report = state.sync.run().await?;
    info!(total_synced = report.total_synced, "Manual sync triggered via API");
    Ok(Json(json!({
        "success": true,
        "total_synced": report.total_synced,
        "pages": report.pages
    })))
}

/// GET /health — 存活探针
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "product-service"
    }))
}
