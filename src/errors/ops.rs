use std::fmt::{self, Display};

/// 超参数取值约束中的比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    LessThan,
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::GreaterOrEqual => "≥",
            Self::LessThan => "<",
        };
        write!(f, "{}", symbol)
    }
}

impl ComparisonOperator {
    /// `value` 是否满足 `value <operator> threshold`（NaN 一律不满足）
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterOrEqual => value >= threshold,
            Self::LessThan => value < threshold,
        }
    }
}
