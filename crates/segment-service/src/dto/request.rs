//! 请求 DTO 定义

use serde::Deserialize;
use validator::Validate;

/// 分群评估请求
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateSegmentRequest {
    /// 换行分隔的规则文本
    #[validate(length(min = 1, message = "规则文本不能为空"))]
    pub rules: String,
}
