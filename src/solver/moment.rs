/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 矩估计与参数更新（Adam / AdaMax）
 *
 * 两个变体共用一阶矩 m：
 *   m ← β1·m + (1−β1)·g,  m_hat = m / (1 − β1^t)
 * 区别仅在于第二个累加量：
 * - Adam:   v ← β2·v + (1−β2)·g²,     w ← w − α · m_hat / (√(v / (1 − β2^t)) + ε)
 * - AdaMax: u ← max(β2·u, |g|),       w ← w − α · m_hat / u
 *
 * t 为从 1 开始的全局步数（跨 epoch 累计，不按 epoch 重置）。
 */

use enum_dispatch::enum_dispatch;
use ndarray::{Array1, Zip};

use crate::config::{SolverConfig, SubMode};
use crate::errors::SolverError;

/// 第二个累加量（按变体二选一，不会同时存在）
#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum SecondMoment {
    Adam(AdamMoment),
    AdaMax(AdaMaxMoment),
}

#[enum_dispatch(SecondMoment)]
pub trait TraitSecondMoment {
    fn sub_mode(&self) -> SubMode;

    /// 用本步梯度更新累加量
    fn accumulate(&mut self, gradient: &Array1<f64>);

    /// 由偏差修正后的一阶矩计算更新方向（尚未乘步长）
    fn direction(&self, m_hat: &Array1<f64>, t: u64) -> Array1<f64>;
}

/// Adam 的二阶矩 v
#[derive(Debug, Clone, PartialEq)]
pub struct AdamMoment {
    v: Array1<f64>,
    beta2: f64,
    epsilon: f64,
}

impl AdamMoment {
    pub fn new(dimension: usize, beta2: f64, epsilon: f64) -> Self {
        Self {
            v: Array1::zeros(dimension),
            beta2,
            epsilon,
        }
    }

    pub fn v(&self) -> &Array1<f64> {
        &self.v
    }
}

impl TraitSecondMoment for AdamMoment {
    fn sub_mode(&self) -> SubMode {
        SubMode::Adam
    }

    fn accumulate(&mut self, gradient: &Array1<f64>) {
        let beta2 = self.beta2;
        self.v
            .zip_mut_with(gradient, |v, &g| *v = beta2 * *v + (1.0 - beta2) * g * g);
    }

    fn direction(&self, m_hat: &Array1<f64>, t: u64) -> Array1<f64> {
        let bc2 = bias_correction(self.beta2, t);
        Zip::from(m_hat)
            .and(&self.v)
            .map_collect(|&m, &v| m / ((v / bc2).sqrt() + self.epsilon))
    }
}

/// AdaMax 的无穷范数 u
#[derive(Debug, Clone, PartialEq)]
pub struct AdaMaxMoment {
    u: Array1<f64>,
    beta2: f64,
}

impl AdaMaxMoment {
    pub fn new(dimension: usize, beta2: f64) -> Self {
        Self {
            u: Array1::zeros(dimension),
            beta2,
        }
    }

    pub fn u(&self) -> &Array1<f64> {
        &self.u
    }
}

impl TraitSecondMoment for AdaMaxMoment {
    fn sub_mode(&self) -> SubMode {
        SubMode::AdaMax
    }

    fn accumulate(&mut self, gradient: &Array1<f64>) {
        let beta2 = self.beta2;
        self.u
            .zip_mut_with(gradient, |u, &g| *u = (beta2 * *u).max(g.abs()));
    }

    fn direction(&self, m_hat: &Array1<f64>, _t: u64) -> Array1<f64> {
        // u_i 为 0 时 m_i 不一定为 0（β2 = 0 时遇到零梯度，或 u 先于 m 下溢），
        // 此时该分量不移动。
        Zip::from(m_hat)
            .and(&self.u)
            .map_collect(|&m, &u| if u == 0.0 { 0.0 } else { m / u })
    }
}

/// 矩估计器：持有一阶矩 m 以及按变体选定的第二个累加量
///
/// # 示例
/// ```ignore
/// let mut estimator = MomentEstimator::from_config(&config, problem.dimension());
/// estimator.update(&mut w, &gradient, step_size, t)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MomentEstimator {
    /// 一阶矩
    m: Array1<f64>,
    beta1: f64,
    second: SecondMoment,
}

impl MomentEstimator {
    /// 创建新的矩估计器（所有累加量从 0 开始）
    pub fn new(dimension: usize, sub_mode: SubMode, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        let second: SecondMoment = match sub_mode {
            SubMode::Adam => AdamMoment::new(dimension, beta2, epsilon).into(),
            SubMode::AdaMax => AdaMaxMoment::new(dimension, beta2).into(),
        };
        Self {
            m: Array1::zeros(dimension),
            beta1,
            second,
        }
    }

    pub fn from_config(config: &SolverConfig, dimension: usize) -> Self {
        Self::new(
            dimension,
            config.sub_mode(),
            config.beta1(),
            config.beta2(),
            config.epsilon(),
        )
    }

    /// 用一个批次的梯度原地更新权重 `w`
    ///
    /// # 参数
    /// - `w`: 当前权重，原地更新
    /// - `gradient`: 本批次梯度，长度须与 `w` 一致
    /// - `step_size`: 本步学习率
    /// - `t`: 从 1 开始的全局步数
    pub fn update(
        &mut self,
        w: &mut Array1<f64>,
        gradient: &Array1<f64>,
        step_size: f64,
        t: u64,
    ) -> Result<(), SolverError> {
        debug_assert!(t >= 1, "全局步数从 1 开始");
        let dimension = self.m.len();
        for got in [gradient.len(), w.len()] {
            if got != dimension {
                return Err(SolverError::DimensionMismatch {
                    expected: dimension,
                    got,
                });
            }
        }

        let beta1 = self.beta1;
        self.m
            .zip_mut_with(gradient, |m, &g| *m = beta1 * *m + (1.0 - beta1) * g);
        self.second.accumulate(gradient);

        let m_hat = self.bias_corrected_first_moment(t);
        let direction = self.second.direction(&m_hat, t);
        w.scaled_add(-step_size, &direction);
        Ok(())
    }

    /// 偏差修正后的一阶矩 m / (1 − β1^t)
    pub fn bias_corrected_first_moment(&self, t: u64) -> Array1<f64> {
        &self.m / bias_correction(self.beta1, t)
    }

    pub fn sub_mode(&self) -> SubMode {
        self.second.sub_mode()
    }

    /// 一阶矩 m
    pub fn first_moment(&self) -> &Array1<f64> {
        &self.m
    }

    /// Adam 的二阶矩 v（AdaMax 时为 `None`）
    pub fn second_moment(&self) -> Option<&Array1<f64>> {
        match &self.second {
            SecondMoment::Adam(adam) => Some(adam.v()),
            SecondMoment::AdaMax(_) => None,
        }
    }

    /// AdaMax 的无穷范数 u（Adam 时为 `None`）
    pub fn infinity_norm(&self) -> Option<&Array1<f64>> {
        match &self.second {
            SecondMoment::Adam(_) => None,
            SecondMoment::AdaMax(adamax) => Some(adamax.u()),
        }
    }
}

/// 偏差修正因子 1 − β^t
fn bias_correction(beta: f64, t: u64) -> f64 {
    // t 超出 i32 范围时 β^t 早已下溢为 0
    match i32::try_from(t) {
        Ok(t) => 1.0 - beta.powi(t),
        Err(_) => 1.0,
    }
}
