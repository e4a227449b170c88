//! 分群服务错误类型定义
//!
//! 错误码区分「规则可修正」「商品服务不可用」「内部异常」三类，
//! 前端据此决定提示文案。

use crate::catalog::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use segment_engine::RuleError;
use serde_json::json;

/// 分群服务错误
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("参数验证失败: {0}")]
    Validation(String),
}

impl SegmentError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rule(rule) if rule.is_user_error() => StatusCode::BAD_REQUEST,
            // 不支持的操作符意味着解析器与评估器的契约被破坏
            Self::Rule(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Catalog(CatalogError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Rule(RuleError::InvalidCondition(_)) => "INVALID_RULE",
            Self::Rule(RuleError::NoConditions) => "NO_CONDITIONS",
            Self::Rule(RuleError::UnsupportedOperator(_)) => "INTERNAL_ERROR",
            Self::Catalog(CatalogError::Timeout) => "PRODUCT_SERVICE_TIMEOUT",
            Self::Catalog(CatalogError::Unavailable(_)) => "PRODUCT_SERVICE_UNAVAILABLE",
            Self::Catalog(CatalogError::UpstreamStatus(_)) => "PRODUCT_SERVICE_ERROR",
            Self::Catalog(CatalogError::InvalidBody(_)) => "PRODUCT_SERVICE_BAD_RESPONSE",
            Self::Catalog(CatalogError::Request(_)) => "PRODUCT_SERVICE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for SegmentError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 内部契约错误只返回通用提示，细节仅记录日志
        let message = match &self {
            Self::Rule(rule @ RuleError::UnsupportedOperator(_)) => {
                tracing::error!(error = %rule, "Parser/evaluator contract violation");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for SegmentError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
