use crate::config::{SolverConfig, StepAlg};

/// 步长调度
///
/// - `fixed`: step(t) = step0
/// - `decay`: step(t) = step0 / (1 + step0 · λ · t)
///
/// 其中 `t` 取本次更新 **之前** 的全局步数（首个批次为 0）。
/// λ ≥ 0 时步长单调不增，λ = 0 时与 `fixed` 完全一致。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSchedule {
    step_init: f64,
    lambda: f64,
    step_alg: StepAlg,
}

impl StepSchedule {
    pub const fn new(step_init: f64, lambda: f64, step_alg: StepAlg) -> Self {
        Self {
            step_init,
            lambda,
            step_alg,
        }
    }

    pub const fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.step(), config.lambda(), config.step_alg())
    }

    /// 计算全局步数为 `step_count` 时的有效学习率
    pub fn step_size(&self, step_count: u64) -> f64 {
        match self.step_alg {
            StepAlg::Fixed => self.step_init,
            StepAlg::Decay => {
                self.step_init / (1.0 + self.step_init * self.lambda * step_count as f64)
            }
        }
    }
}
