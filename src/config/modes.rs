use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SolverError;

/// 步长策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StepAlg {
    /// 固定步长
    #[default]
    Fixed,
    /// 按全局步数衰减：step(t) = step0 / (1 + step0 · λ · t)
    Decay,
}

impl StepAlg {
    /// 从字符串解析步长策略（不区分大小写）
    ///
    /// 只有`fixed`会被解析为 [`StepAlg::Fixed`]，其它任何字符串都视作`decay`，
    /// 这是约定的回退行为，不是错误。
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "fixed" => Self::Fixed,
            _ => Self::Decay,
        }
    }
}

impl Display for StepAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fixed => "fixed",
            Self::Decay => "decay",
        };
        write!(f, "{}", name)
    }
}

/// 算法变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SubMode {
    /// 一阶矩 + 二阶矩
    #[default]
    Adam,
    /// 一阶矩 + 无穷范数
    AdaMax,
}

impl FromStr for SubMode {
    type Err = SolverError;

    /// 解析算法变体（不区分大小写），只接受`Adam`与`AdaMax`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adam" => Ok(Self::Adam),
            "adamax" => Ok(Self::AdaMax),
            _ => Err(SolverError::UnknownSubMode(s.to_string())),
        }
    }
}

impl Display for SubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Adam => "Adam",
            Self::AdaMax => "AdaMax",
        };
        write!(f, "{}", name)
    }
}
