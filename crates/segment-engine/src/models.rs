//! 规则引擎领域模型

use crate::operators::Operator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 解析后的单条约束
///
/// `value` 保留规则文本中去除首尾空白后的原始字面量，
/// 类型强转在评估时进行（见 evaluator 模块），解析产物本身不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 一次评估调用的完整结果
///
/// 临时返回值，不跨调用缓存。`conditions` 按规则文本行序排列，
/// 供调用方展示与排查；`data` 保持输入记录的相对顺序。
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub conditions: Vec<Condition>,
    pub count: usize,
    pub data: Vec<Value>,
}

impl EvaluationResult {
    pub fn new(conditions: Vec<Condition>, data: Vec<Value>) -> Self {
        Self {
            count: data.len(),
            conditions,
            data,
        }
    }
}
