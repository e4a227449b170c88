//! 分群执行器
//!
//! 将条件序列以 AND 语义应用于记录集合：记录须满足全部条件才被保留。
//! 纯函数管道，单次调用内完成，不持有记录集合，也不跨调用缓存。

use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::models::{Condition, EvaluationResult};
use crate::parser::RuleParser;
use serde_json::Value;

/// 分群执行器
pub struct SegmentExecutor;

impl SegmentExecutor {
    /// 过滤记录集合，保留满足全部条件的记录
    ///
    /// 条件间按 AND 短路求值；输出保持输入记录的相对顺序。
    pub fn filter(records: Vec<Value>, conditions: &[Condition]) -> Vec<Value> {
        records
            .into_iter()
            .filter(|record| {
                conditions
                    .iter()
                    .all(|condition| ConditionEvaluator::evaluate(record, condition))
            })
            .collect()
    }

    /// 完整的解析加过滤管道
    ///
    /// 解析失败（含零条件输入）整体失败，不产生部分结果。
    pub fn execute(rules_text: &str, records: Vec<Value>) -> Result<EvaluationResult> {
        let conditions = RuleParser::parse(rules_text)?;
        let data = Self::filter(records, &conditions);
        Ok(EvaluationResult::new(conditions, data))
    }
}
