//! 日志初始化模块
//!
//! 基于 tracing-subscriber 构建结构化日志：环境过滤器 + json/pretty 输出层。

use crate::config::ObservabilityConfig;
use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 初始化全局日志订阅器
///
/// RUST_LOG 环境变量优先于配置中的 log_level；
/// 重复初始化（如测试中多次调用）返回错误而不是 panic。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = if config.log_format == "json" {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_pretty_then_second_init_fails() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            log_format: "pretty".to_string(),
        };
        // 进程内首次初始化成功，二次初始化应报错而非 panic
        let first = init(&config);
        let second = init(&config);
        assert!(first.is_ok() || second.is_err());
    }
}
