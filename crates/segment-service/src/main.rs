//! 商品分群服务入口

use axum::http::HeaderValue;
use catalog_shared::{AppConfig, observability};
use segment_service::catalog::CatalogClient;
use segment_service::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("segment-service").unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    observability::init(&config.observability)?;
    info!("Starting segment-service on {}", config.server_addr());

    let catalog = CatalogClient::new(&config.product_service)
        .map_err(|e| anyhow::anyhow!("商品服务客户端构建失败: {e}"))?;
    info!(
        product_service_url = %config.product_service.url,
        "Catalog client initialized"
    );

    // CORS：通过 CATALOG_CORS_ORIGINS 环境变量控制允许的来源，
    // 默认允许本地开发地址
    let allowed_origins = std::env::var("CATALOG_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("CATALOG_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = segment_service::app(AppState::new(Arc::new(catalog))).layer(cors);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// 监听关闭信号
///
/// 收到 SIGTERM 或 Ctrl+C 后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
