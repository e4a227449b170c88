//! WooCommerce 上游客户端
//!
//! 以 consumer_key / consumer_secret 查询参数鉴权，分页拉取商品。
//! 同步失败不在此层重试，等待下一个同步周期。

use crate::models::{Product, WcProduct};
use async_trait::async_trait;
use catalog_shared::config::WooCommerceConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// 上游访问错误
///
/// 各变体保持可区分，调用方据此生成不同的运维提示。
#[derive(Debug, Error)]
pub enum WooError {
    #[error("无法连接 WooCommerce 上游: {0}")]
    Connect(String),

    #[error("WooCommerce 请求超时")]
    Timeout,

    #[error("WooCommerce API 返回状态 {status}: {body}")]
    Api { status: u16, body: String },

    #[error("WooCommerce 请求失败: {0}")]
    Request(String),
}

impl From<reqwest::Error> for WooError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// 商品分页拉取接口
///
/// 同步逻辑只依赖该接口，测试中用 mock 实现替换真实上游。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// 拉取指定页的商品，页码从 1 开始；空列表表示没有更多数据
    async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, WooError>;
}

/// WooCommerce HTTP 客户端
pub struct WooClient {
    http: reqwest::Client,
    config: WooCommerceConfig,
}

impl WooClient {
    pub fn new(config: WooCommerceConfig) -> Result<Self, WooError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| WooError::Request(e.to_string()))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl ProductFetcher for WooClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, WooError> {
        let url = format!("{}/products", self.config.base_url);
        debug!(page, per_page = self.config.per_page, "Fetching products page");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("consumer_key", self.config.consumer_key.as_str()),
                ("consumer_secret", self.config.consumer_secret.as_str()),
                ("page", page.to_string().as_str()),
                ("per_page", self.config.per_page.to_string().as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WooError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let wc_products: Vec<WcProduct> = response.json().await?;
        Ok(wc_products.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(WooClient::new(WooCommerceConfig::default()).is_ok());
    }

    #[test]
    fn test_error_display_keeps_status_and_body() {
        let err = WooError::Api {
            status: 401,
            body: "invalid signature".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("invalid signature"));
    }
}
