//! 商品分群规则引擎
//!
//! 提供从自由文本规则到商品子集的完整求值能力：
//! - 逐行解析比较 / 包含两种文法的条件行
//! - 评估时对条件值做数字、布尔强转
//! - 条件间以 AND 语义组合，保持记录顺序的稳定过滤
//!
//! 引擎是同步纯函数管道，不持有状态，可被调用方并发使用。

pub mod error;
pub mod evaluator;
pub mod executor;
pub mod models;
pub mod operators;
pub mod parser;

pub use error::{Result, RuleError};
pub use evaluator::{CoercedValue, ConditionEvaluator};
pub use executor::SegmentExecutor;
pub use models::{Condition, EvaluationResult};
pub use operators::Operator;
pub use parser::RuleParser;
