//! 目录服务公共基础设施
//!
//! 配置加载与日志初始化，供 product-service 与 segment-service 共用。

pub mod config;
pub mod observability;

pub use config::AppConfig;
