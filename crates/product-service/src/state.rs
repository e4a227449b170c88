//! 服务共享状态

use crate::store::ProductStore;
use crate::sync::SyncService;
use std::sync::Arc;

/// 路由层共享状态
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub sync: Arc<SyncService>,
}

impl AppState {
    pub fn new(store: ProductStore, sync: Arc<SyncService>) -> Self {
        Self { store, sync }
    }
}
