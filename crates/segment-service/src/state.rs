//! 服务共享状态

use crate::catalog::ProductSource;
use std::sync::Arc;

/// 路由层共享状态
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ProductSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductSource>) -> Self {
        Self { catalog }
    }
}
