//! 商品目录镜像服务入口

use catalog_shared::{AppConfig, observability};
use product_service::state::AppState;
use product_service::store::ProductStore;
use product_service::sync::SyncService;
use product_service::woocommerce::WooClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("product-service").unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    observability::init(&config.observability)?;
    info!("Starting product-service on {}", config.server_addr());

    let store = ProductStore::new();
    let fetcher = Arc::new(WooClient::new(config.woocommerce.clone())?);
    let sync = Arc::new(SyncService::new(fetcher, store.clone(), config.woocommerce.max_pages));

    // 后台同步任务：可选的启动同步 + 固定周期全量同步。
    // 失败只记录日志，等待下一个周期，不做重试。
    let background_sync = sync.clone();
    let sync_config = config.sync.clone();
    tokio::spawn(async move {
        if sync_config.run_on_startup {
            if let Err(e) = background_sync.run().await {
                error!(error = %e, "Startup sync failed");
            }
        }

        let mut ticker = tokio::time::interval(Duration::from_secs(sync_config.interval_seconds));
        // 第一个 tick 立即完成，跳过以免与启动同步重复
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = background_sync.run().await {
                error!(error = %e, "Scheduled sync failed");
            }
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = product_service::app(AppState::new(store, sync)).layer(cors);

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
