/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @LastEditTime : 2026-10-16
 * @Description  : 求解器驱动：epoch / mini-batch 主循环
 *
 * 一次求解的流程：
 * 1. 配置在外部一次性解析为 SolverConfig；
 * 2. 初始化权重（给定或由随机源生成）与全零的矩估计；
 * 3. 记录第 0 条历史（迭代前状态），判断是否需要迭代；
 * 4. 每个 epoch：生成样本顺序 → 逐批次（算步长 → 步数+1 → 取梯度 → 更新权重）
 *    → 计时、累计梯度计算次数 → 计算目标值与间隙 → 追加历史 → 收敛判定。
 */

mod clock;
mod convergence;
mod history;
mod iteration;
mod moment;
mod schedule;

#[cfg(test)]
mod tests;

pub use clock::{Clock, WallClock};
pub use convergence::{ConvergenceMonitor, StopReason};
pub use history::{EpochRecord, History};
pub use iteration::BatchSampler;
pub use moment::{AdaMaxMoment, AdamMoment, MomentEstimator, SecondMoment, TraitSecondMoment};
pub use schedule::StepSchedule;

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

use crate::config::{SolverConfig, SolverOptions};
use crate::errors::SolverError;
use crate::problem::Problem;

/// 一次求解的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResult {
    /// 最终权重
    pub w: Array1<f64>,
    /// 逐 epoch 的历史记录
    pub history: History,
    /// 终止原因
    pub stop_reason: StopReason,
    /// 全局步数（已处理的批次总数）
    pub step_count: u64,
}

impl SolverResult {
    /// 实际执行的 epoch 数
    pub fn epochs(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

/// 求解期间的可变状态，仅由驱动循环持有和修改
struct OptimizerState {
    w: Array1<f64>,
    estimator: MomentEstimator,
    /// 全局步数 t，每处理一个批次加 1，整个求解期间不重置
    step_count: u64,
    epoch: usize,
}

/// 求解器
///
/// # 示例
/// ```ignore
/// let config = SolverOptions::new()
///     .step(0.01)
///     .batch_size(10)
///     .max_epoch(50)
///     .resolve(&problem)?;
/// let result = Solver::new(config).run(&problem)?;
/// println!("终止原因: {}", result.stop_reason);
/// ```
pub struct Solver {
    config: SolverConfig,
    clock: Box<dyn Clock>,
}

impl Solver {
    /// 用已解析的配置创建求解器（默认使用墙钟计时）
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            clock: Box::new(WallClock::new()),
        }
    }

    /// 替换计时源
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 对给定问题执行一次完整求解
    pub fn run<P: Problem + ?Sized>(&mut self, problem: &P) -> Result<SolverResult, SolverError> {
        let config = &self.config;
        let dimension = problem.dimension();
        let sampler = BatchSampler::new(
            problem.sample_count(),
            config.batch_size(),
            config.permute_on(),
        );
        if sampler.num_batches() == 0 {
            tracing::warn!(
                batch_size = config.batch_size(),
                samples = problem.sample_count(),
                "batch_size 大于样本数，每个 epoch 不会更新权重"
            );
        }

        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let w: Array1<f64> = match config.w_init() {
            Some(w) if w.len() != dimension => {
                return Err(SolverError::DimensionMismatch {
                    expected: dimension,
                    got: w.len(),
                });
            }
            Some(w) => w.clone(),
            None => Array1::from_shape_fn(dimension, |_| StandardNormal.sample(&mut rng)),
        };
        let mut state = OptimizerState {
            w,
            estimator: MomentEstimator::from_config(config, dimension),
            step_count: 0,
            epoch: 0,
        };

        let schedule = StepSchedule::from_config(config);
        let monitor = ConvergenceMonitor::from_config(config);
        let mut history = History::new();
        let mut grad_calc_count: u64 = 0;

        tracing::debug!(
            dimension,
            samples = problem.sample_count(),
            sub_mode = %config.sub_mode(),
            step_alg = %config.step_alg(),
            batch_size = config.batch_size(),
            "开始求解"
        );

        self.clock.start();
        let cost = problem.cost(&state.w)?;
        let mut optgap = monitor.optgap(cost);
        record_epoch(config, &mut history, &state, 0.0, grad_calc_count, cost, optgap);

        let stop_reason = loop {
            if let Some(reason) = monitor.check(optgap, state.epoch) {
                break reason;
            }

            let order = sampler.epoch_order(&mut rng);
            for batch in sampler.batches(&order) {
                let step_size = schedule.step_size(state.step_count);
                state.step_count += 1;
                let gradient = problem.gradient(&state.w, batch)?;
                state
                    .estimator
                    .update(&mut state.w, &gradient, step_size, state.step_count)?;
            }

            let elapsed = self.clock.elapsed();
            grad_calc_count += sampler.samples_per_epoch() as u64;
            state.epoch += 1;

            let cost = problem.cost(&state.w)?;
            optgap = monitor.optgap(cost);
            if optgap.is_nan() {
                tracing::warn!(epoch = state.epoch, cost, "最优性间隙为 NaN，停止迭代");
            }
            record_epoch(
                config,
                &mut history,
                &state,
                elapsed,
                grad_calc_count,
                cost,
                optgap,
            );
        };

        if config.verbose() {
            match stop_reason {
                StopReason::ToleranceReached => {
                    println!("{}: tol_optgap = {:e}", stop_reason, config.tol_optgap())
                }
                StopReason::EpochBudgetExhausted => {
                    println!("{}: max_epoch = {}", stop_reason, state.epoch)
                }
            }
        }
        tracing::info!(
            reason = ?stop_reason,
            epochs = state.epoch,
            steps = state.step_count,
            "求解结束"
        );

        Ok(SolverResult {
            w: state.w,
            history,
            stop_reason,
            step_count: state.step_count,
        })
    }
}

fn record_epoch(
    config: &SolverConfig,
    history: &mut History,
    state: &OptimizerState,
    time: f64,
    grad_calc_count: u64,
    cost: f64,
    optgap: f64,
) {
    let record = EpochRecord {
        epoch: state.epoch,
        time,
        grad_calc_count,
        cost,
        optgap,
        w: config.store_w().then(|| state.w.clone()),
    };
    tracing::trace!(epoch = record.epoch, cost, optgap, "epoch 结束");
    if config.verbose() {
        println!("{}", record.summary(config.sub_mode()));
    }
    history.push(record);
}

/// 解析选项并对问题执行一次求解
///
/// # 示例
/// ```ignore
/// let result = minimize(&problem, &SolverOptions::new().max_epoch(20).seed(7))?;
/// ```
pub fn minimize<P: Problem + ?Sized>(
    problem: &P,
    options: &SolverOptions,
) -> Result<SolverResult, SolverError> {
    let config = options.resolve(problem)?;
    Solver::new(config).run(problem)
}
