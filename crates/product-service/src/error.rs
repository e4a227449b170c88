//! 商品服务错误类型定义

use crate::woocommerce::WooError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 商品服务错误
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("商品同步失败: {0}")]
    Sync(#[from] WooError),
}

impl ProductError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Sync(WooError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Sync(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Sync(WooError::Timeout) => "UPSTREAM_TIMEOUT",
            Self::Sync(WooError::Connect(_)) => "UPSTREAM_UNAVAILABLE",
            Self::Sync(WooError::Api { .. }) => "UPSTREAM_ERROR",
            Self::Sync(WooError::Request(_)) => "SYNC_FAILED",
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(error = %self, code = self.error_code(), "Request failed");

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": self.to_string(),
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}
