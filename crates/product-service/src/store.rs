//! 商品内存镜像
//!
//! 基于 DashMap 的并发安全存储。镜像按需整体重建，
//! 不做持久化：进程重启后由下一次同步补齐。

use crate::models::Product;
use dashmap::DashMap;
use std::sync::Arc;

/// 商品存储
#[derive(Debug, Default)]
pub struct ProductStore {
    data: Arc<DashMap<i64, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
        }
    }

    /// 插入或覆盖同 id 商品
    pub fn upsert(&self, product: Product) {
        self.data.insert(product.id, product);
    }

    /// 按 id 升序列出全部商品
    ///
    /// DashMap 迭代顺序不稳定，排序保证 API 输出可复现。
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        products.sort_by_key(|p| p.id);
        products
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.data.get(&id).map(|v| v.clone())
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }
}

impl Clone for ProductStore {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}
