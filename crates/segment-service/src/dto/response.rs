//! 响应 DTO 定义

use segment_engine::{Condition, EvaluationResult};
use serde::Serialize;
use serde_json::Value;

/// 分群评估成功响应
///
/// `conditions` 回显解析产物供前端展示与排查。
#[derive(Debug, Serialize)]
pub struct EvaluateSegmentResponse {
    pub success: bool,
    pub conditions: Vec<Condition>,
    pub count: usize,
    pub data: Vec<Value>,
}

impl From<EvaluationResult> for EvaluateSegmentResponse {
    fn from(result: EvaluationResult) -> Self {
        Self {
            success: true,
            conditions: result.conditions,
            count: result.count,
            data: result.data,
        }
    }
}
