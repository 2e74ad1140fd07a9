use std::fmt::{self, Display};

use serde::Serialize;

use crate::config::SolverConfig;

/// 求解终止的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// 最优性间隙已不大于 `tol_optgap`
    ToleranceReached,
    /// 已用完 `max_epoch` 个 epoch，间隙仍大于阈值
    EpochBudgetExhausted,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::ToleranceReached => "最优性间隙已达到阈值",
            Self::EpochBudgetExhausted => "已达到最大 epoch 数",
        };
        write!(f, "{}", reason)
    }
}

/// 收敛判定
///
/// 继续迭代的条件：`optgap > tol_optgap` 且 `epoch < max_epoch`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceMonitor {
    f_sol: f64,
    tol_optgap: f64,
    max_epoch: Option<usize>,
}

impl ConvergenceMonitor {
    pub const fn new(f_sol: f64, tol_optgap: f64, max_epoch: Option<usize>) -> Self {
        Self {
            f_sol,
            tol_optgap,
            max_epoch,
        }
    }

    pub const fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.f_sol(), config.tol_optgap(), config.max_epoch())
    }

    /// 最优性间隙 f − f_sol
    pub fn optgap(&self, cost: f64) -> f64 {
        cost - self.f_sol
    }

    /// 判断已完成 `epoch` 个 epoch、间隙为 `optgap` 时是否应停止
    ///
    /// 返回 `None` 表示继续迭代。间隙判定优先于 epoch 预算；
    /// 间隙为 NaN 时 `optgap > tol_optgap` 不成立，同样按间隙条件停止。
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn check(&self, optgap: f64, epoch: usize) -> Option<StopReason> {
        if !(optgap > self.tol_optgap) {
            return Some(StopReason::ToleranceReached);
        }
        match self.max_epoch {
            Some(max_epoch) if epoch >= max_epoch => Some(StopReason::EpochBudgetExhausted),
            _ => None,
        }
    }
}
