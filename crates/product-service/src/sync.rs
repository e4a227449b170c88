//! 商品同步服务
//!
//! 从上游分页拉取并写入内存镜像。页循环在空页或安全页数上限处停止。

use crate::store::ProductStore;
use crate::woocommerce::{ProductFetcher, WooError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// 单次同步的统计结果
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SyncReport {
    pub total_synced: usize,
    pub pages: u32,
}

/// 同步服务
pub struct SyncService {
    fetcher: Arc<dyn ProductFetcher>,
    store: ProductStore,
    max_pages: u32,
}

impl SyncService {
    pub fn new(fetcher: Arc<dyn ProductFetcher>, store: ProductStore, max_pages: u32) -> Self {
        Self {
            fetcher,
            store,
            max_pages,
        }
    }

    /// 执行一次全量同步
    ///
    /// 任一页拉取失败即整体失败，已写入的页保留在镜像中，
    /// 由下一次成功同步覆盖修正。
    pub async fn run(&self) -> Result<SyncReport, WooError> {
        info!("Starting product sync");

        let mut page = 1;
        let mut total_synced = 0;
        let mut pages = 0;

        loop {
            let products = self.fetcher.fetch_page(page).await?;
            if products.is_empty() {
                break;
            }

            pages += 1;
            let page_count = products.len();
            for product in products {
                self.store.upsert(product);
                total_synced += 1;
            }
            info!(page, count = page_count, total_synced, "Page synced");

            if page >= self.max_pages {
                warn!(max_pages = self.max_pages, "Reached page safety limit, stopping sync");
                break;
            }
            page += 1;
        }

        info!(total_synced, pages, "Product sync completed");
        Ok(SyncReport {
            total_synced,
            pages,
        })
    }
}
