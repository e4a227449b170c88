//! 规则文本解析器
//!
//! 将多行规则文本逐行解析为 [`Condition`] 序列。每行依次尝试一组
//! 固定顺序的文法匹配器，首个命中者胜出；整体解析是全有或全无的：
//! 任何无法识别的非空行都会使本次解析立即失败，不返回部分结果。

use crate::error::{Result, RuleError};
use crate::models::Condition;
use crate::operators::Operator;
use regex::Regex;
use std::sync::LazyLock;

/// 比较文法：`<field> <op> <value>`
///
/// 双字符操作符必须排在对应单字符操作符之前，
/// 否则 `>=` 会被误拆为 `>` 加值 `=...`。
static COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\s*(>=|<=|!=|=|>|<)\s*(.+)$").unwrap());

/// 包含文法：`<field> contains <value>`，关键字不区分大小写
static CONTAINS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([A-Za-z0-9_]+)\s+contains\s+(.+)$").unwrap());

/// 规则解析器
pub struct RuleParser;

impl RuleParser {
    /// 按行序排列的文法匹配器，首个返回 `Some` 的结果即为该行的解析产物
    const MATCHERS: [fn(&str) -> Option<Condition>; 2] =
        [Self::match_comparison, Self::match_contains];

    /// 解析多行规则文本
    ///
    /// 空白行跳过；无法识别的非空行返回 [`RuleError::InvalidCondition`]
    /// 并携带该行原文；全部处理完后若没有产生任何条件，
    /// 返回 [`RuleError::NoConditions`]。
    pub fn parse(rules_text: &str) -> Result<Vec<Condition>> {
        let mut conditions = Vec::new();

        for line in rules_text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let condition = Self::parse_line(trimmed)
                .ok_or_else(|| RuleError::InvalidCondition(trimmed.to_string()))?;
            conditions.push(condition);
        }

        if conditions.is_empty() {
            return Err(RuleError::NoConditions);
        }

        Ok(conditions)
    }

    /// 解析单个已去除首尾空白的非空行
    fn parse_line(line: &str) -> Option<Condition> {
        Self::MATCHERS.iter().find_map(|matcher| matcher(line))
    }

    fn match_comparison(line: &str) -> Option<Condition> {
        let caps = COMPARISON.captures(line)?;
        // 固定文法保证捕获到的符号一定在支持集合内
        let operator: Operator = caps[2].parse().ok()?;
        Some(Condition::new(&caps[1], operator, caps[3].trim()))
    }

    fn match_contains(line: &str) -> Option<Condition> {
        let caps = CONTAINS.captures(line)?;
        Some(Condition::new(
            &caps[1],
            Operator::Contains,
            caps[2].trim(),
        ))
    }
}
