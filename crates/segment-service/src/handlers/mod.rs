//! 分群服务 HTTP 处理器

pub mod segment;

use axum::Json;
use serde_json::{Value, json};

/// GET /health — 存活探针
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "segment-service"
    }))
}
