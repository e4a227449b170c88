//! 条件评估器
//!
//! 对单条 [`Condition`] 与单条记录求值。条件值的类型强转在这里进行，
//! 每次 (条件, 记录) 求值独立重算，强转只依赖字面量本身，结果确定。
//!
//! 相等比较沿用宽松语义（数字 5 等于字符串 "5"），这是为兼容既有
//! 规则数据而保留的历史行为，不是严格类型相等；测试用例将其固定。

use crate::models::Condition;
use crate::operators::Operator;
use serde_json::Value;
use std::fmt;

/// 条件值强转结果
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CoercedValue {
    /// 将条件文本字面量强转为可比较类型
    ///
    /// 依次尝试：剥除一层成对的包围引号；整体解析为有限十进制数；
    /// 精确匹配 `true` / `false`；否则保留为字符串。
    pub fn coerce(raw: &str) -> Self {
        let unquoted = Self::strip_quotes(raw);

        if !unquoted.is_empty() {
            if let Ok(n) = unquoted.parse::<f64>() {
                // `NaN` / `inf` 等拼写不属于十进制数字面量，保留为字符串
                if n.is_finite() {
                    return Self::Number(n);
                }
            }
        }

        match unquoted {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(unquoted.to_string()),
        }
    }

    /// 剥除一层包围的成对引号（`"` 或 `'`）
    fn strip_quotes(raw: &str) -> &str {
        let bytes = raw.as_bytes();
        if bytes.len() >= 2 {
            let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
            if first == last && (first == b'"' || first == b'\'') {
                return &raw[1..raw.len() - 1];
            }
        }
        raw
    }
}

impl fmt::Display for CoercedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 对单条记录评估单个条件
    ///
    /// 字段缺失或为 null 不会报错：相等比较返回 false，
    /// 数值比较按非数字处理返回 false，contains 返回 false。
    pub fn evaluate(record: &Value, condition: &Condition) -> bool {
        // null 与缺失字段同等对待
        let field_value = record
            .get(condition.field.as_str())
            .filter(|v| !v.is_null());
        let expected = CoercedValue::coerce(&condition.value);

        match condition.operator {
            Operator::Eq => Self::loose_eq(field_value, &expected),
            Operator::Ne => !Self::loose_eq(field_value, &expected),
            Operator::Gt => Self::numeric_cmp(field_value, &expected, |a, b| a > b),
            Operator::Lt => Self::numeric_cmp(field_value, &expected, |a, b| a < b),
            Operator::Gte => Self::numeric_cmp(field_value, &expected, |a, b| a >= b),
            Operator::Lte => Self::numeric_cmp(field_value, &expected, |a, b| a <= b),
            Operator::Contains => Self::contains(field_value, &expected),
        }
    }

    /// 宽松相等：允许数字/布尔/字符串跨类型比较
    fn loose_eq(field: Option<&Value>, expected: &CoercedValue) -> bool {
        let Some(field) = field else {
            return false;
        };

        match expected {
            CoercedValue::Number(n) => {
                Self::field_as_f64(field).is_some_and(|f| (f - n).abs() < f64::EPSILON)
            }
            CoercedValue::Bool(b) => match field {
                Value::Bool(fb) => fb == b,
                // 数字与数字串通过 0/1 与布尔互通
                _ => {
                    let bool_num = if *b { 1.0 } else { 0.0 };
                    Self::field_as_f64(field)
                        .is_some_and(|f| (f - bool_num).abs() < f64::EPSILON)
                }
            },
            CoercedValue::Text(t) => match field {
                Value::String(s) => s == t,
                // 数字字段对上非数字文本、布尔对上文本，一律不相等
                _ => false,
            },
        }
    }

    /// 数值比较：任一侧无法转为数字即为 false，不报错
    fn numeric_cmp<F>(field: Option<&Value>, expected: &CoercedValue, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        let expected_num = match expected {
            CoercedValue::Number(n) => *n,
            CoercedValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CoercedValue::Text(_) => return false,
        };

        match field.and_then(Self::field_as_f64) {
            Some(field_num) => cmp(field_num, expected_num),
            None => false,
        }
    }

    /// 子串包含：字段为空值（缺失、false、0、空串）直接 false，
    /// 否则对双方的字符串形式做不区分大小写的包含测试
    fn contains(field: Option<&Value>, expected: &CoercedValue) -> bool {
        let Some(field) = field else {
            return false;
        };
        if Self::is_falsy(field) {
            return false;
        }

        let haystack = Self::value_to_string(field).to_lowercase();
        let needle = expected.to_string().to_lowercase();
        haystack.contains(&needle)
    }

    fn is_falsy(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// 字段值转数字（失败即视为不可比较）
    fn field_as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse().ok().filter(|f: &f64| f.is_finite())
            }
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// 字段值的字符串形式；数组按逗号拼接元素，使标签列表可参与 contains
    fn value_to_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => items
                .iter()
                .map(Self::value_to_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Null => String::new(),
            Value::Object(_) => value.to_string(),
        }
    }
}
