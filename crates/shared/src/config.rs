//! 配置管理模块
//!
//! 支持多层配置文件加载与环境变量覆盖，提供类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 服务监听配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// WooCommerce 上游配置
///
/// consumer_key / consumer_secret 以查询参数方式随每次请求发送，
/// 生产环境通过 CATALOG_WOOCOMMERCE_CONSUMER_KEY 等环境变量注入。
#[derive(Debug, Clone, Deserialize)]
pub struct WooCommerceConfig {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub timeout_seconds: u64,
}

impl Default for WooCommerceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://shop.example.com/wp-json/wc/v3".to_string(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            per_page: 100,
            max_pages: 10,
            timeout_seconds: 30,
        }
    }
}

/// 商品同步配置
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub interval_seconds: u64,
    /// 启动时是否立即执行一次全量同步
    pub run_on_startup: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            run_on_startup: true,
        }
    }
}

/// product-service 下游访问配置（供 segment-service 使用）
#[derive(Debug, Clone, Deserialize)]
pub struct ProductServiceConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3001".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
    pub woocommerce: WooCommerceConfig,
    pub sync: SyncConfig,
    pub product_service: ProductServiceConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（CATALOG_ 前缀，如 CATALOG_SERVER_PORT -> server.port）
    /// 5. 服务端口环境变量（如 PRODUCT_SERVICE_PORT, SEGMENT_SERVICE_PORT）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("CATALOG_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("CATALOG")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        // 服务端口环境变量覆盖：product-service -> PRODUCT_SERVICE_PORT
        if let Some(port) = Self::service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 从环境变量获取服务端口
    ///
    /// 将 "product-service" 转换为 "PRODUCT_SERVICE_PORT"
    fn service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = format!("{}_PORT", service_name.to_uppercase().replace('-', "_"));
        std::env::var(&env_var_name).ok().and_then(|v| v.parse().ok())
    }

    /// 获取服务监听地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.woocommerce.per_page, 100);
        assert_eq!(config.woocommerce.max_pages, 10);
        assert_eq!(config.sync.interval_seconds, 3600);
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3002,
            },
            ..Default::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3002");
    }

    #[test]
    fn test_service_port_env_var_name_conversion() {
        // product-service -> PRODUCT_SERVICE_PORT
        // 环境变量未设置时只验证函数不 panic
        let _ = AppConfig::service_port_from_env("product-service");
        let _ = AppConfig::service_port_from_env("segment-service");
    }

    #[test]
    fn test_is_production() {
        let mut config = AppConfig::default();
        assert!(!config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
    }
}
