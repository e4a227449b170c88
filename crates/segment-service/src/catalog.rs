//! 商品目录访问
//!
//! 分群评估需要全量商品记录。评估逻辑只依赖 [`ProductSource`] 接口，
//! 生产实现走 product-service 的 REST API，测试用 mock 替换。

use async_trait::async_trait;
use catalog_shared::config::ProductServiceConfig;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// 目录访问错误
///
/// 与规则错误严格分开：这类错误提示「服务不可用」，
/// 而不是「请修正规则」。
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("无法连接商品服务，服务可能未启动: {0}")]
    Unavailable(String),

    #[error("请求商品服务超时")]
    Timeout,

    #[error("商品服务返回状态 {0}")]
    UpstreamStatus(u16),

    #[error("商品服务响应格式无法识别: {0}")]
    InvalidBody(String),

    #[error("请求商品服务失败: {0}")]
    Request(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Unavailable(e.to_string())
        } else if e.is_decode() {
            Self::InvalidBody(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// 商品记录来源
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// 拉取全量商品记录（扁平 JSON 对象）
    async fn fetch_products(&self) -> Result<Vec<Value>, CatalogError>;
}

/// product-service REST 客户端
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &ProductServiceConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// 从响应体中提取商品数组
    ///
    /// 兼容两种上游形态：`{success, count, data: [...]}` 包裹对象，
    /// 或直接返回的裸数组。
    fn extract_products(body: Value) -> Result<Vec<Value>, CatalogError> {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(products)) => Ok(products),
                _ => Err(CatalogError::InvalidBody(
                    "对象响应缺少 data 数组".to_string(),
                )),
            },
            Value::Array(products) => Ok(products),
            other => Err(CatalogError::InvalidBody(format!(
                "意外的 JSON 类型: {}",
                type_name(&other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Value>, CatalogError> {
        let url = format!("{}/api/products", self.base_url);
        debug!(%url, "Fetching products from product-service");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let products = Self::extract_products(body)?;
        debug!(count = products.len(), "Products fetched");
        Ok(products)
    }
}
