//! 规则引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    /// 无法识别的条件行，携带原始行文本供用户修正
    #[error("无法解析的条件行: {0}")]
    InvalidCondition(String),

    /// 规则文本为空或全部为空白行
    #[error("规则文本未包含任何可用条件")]
    NoConditions,

    /// 操作符不在支持集合内（解析器的固定文法保证正常路径不会触发）
    #[error("不支持的操作符: {0}")]
    UnsupportedOperator(String),
}

impl RuleError {
    /// 是否为用户可修正的规则输入错误
    ///
    /// 调用方据此区分「修改规则文本」与「服务内部异常」两类提示。
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidCondition(_) | Self::NoConditions)
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;
