/*
 * @Author       : 老董
 * @Date         : 2026-10-11
 * @Description  : 求解器选项与默认值补全
 *
 * 默认值：
 * - step=0.1, step_alg=fixed, lambda=0.1, tol_optgap=1e-12
 * - batch_size=1, max_epoch=∞, sub_mode=Adam
 * - beta1=0.9, beta2=0.9, epsilon=1e-7, f_sol=-∞
 * - permute_on=true, verbose=false, store_w=false
 */

use std::path::Path;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::{StepAlg, SubMode};
use crate::errors::{ComparisonOperator, SolverError};
use crate::problem::Problem;

const DEFAULT_STEP: f64 = 0.1;
const DEFAULT_LAMBDA: f64 = 0.1;
const DEFAULT_TOL_OPTGAP: f64 = 1e-12;
const DEFAULT_BATCH_SIZE: usize = 1;
const DEFAULT_BETA1: f64 = 0.9;
const DEFAULT_BETA2: f64 = 0.9;
const DEFAULT_EPSILON: f64 = 1e-7;

/// 调用方给出的求解选项，未设置的字段在 [`SolverOptions::resolve`] 时补全为默认值
///
/// 既可以链式设置，也可以从 JSON 读取（缺失字段同样视为未设置）：
/// ```ignore
/// let options = SolverOptions::new().step(0.01).batch_size(10).seed(42);
/// let options = SolverOptions::from_json_str(r#"{"step": 0.01, "sub_mode": "AdaMax"}"#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub step: Option<f64>,
    pub step_alg: Option<String>,
    pub lambda: Option<f64>,
    pub tol_optgap: Option<f64>,
    pub batch_size: Option<usize>,
    pub max_epoch: Option<usize>,
    pub w_init: Option<Vec<f64>>,
    pub sub_mode: Option<String>,
    pub beta1: Option<f64>,
    pub beta2: Option<f64>,
    pub epsilon: Option<f64>,
    pub f_sol: Option<f64>,
    pub permute_on: Option<bool>,
    pub verbose: Option<bool>,
    pub seed: Option<u64>,
    pub store_w: Option<bool>,
}

impl SolverOptions {
    /// 创建全部字段未设置的选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串读取选项
    pub fn from_json_str(json: &str) -> Result<Self, SolverError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读取选项
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 设置初始（或固定）步长
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// 设置步长策略：`fixed` 或 `decay`（其它字符串按 `decay` 处理）
    pub fn step_alg(mut self, step_alg: impl Into<String>) -> Self {
        self.step_alg = Some(step_alg.into());
        self
    }

    /// 设置衰减率 λ（仅 `decay` 策略使用）
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// 设置最优性间隙的停止阈值
    pub fn tol_optgap(mut self, tol_optgap: f64) -> Self {
        self.tol_optgap = Some(tol_optgap);
        self
    }

    /// 设置批大小
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// 设置最大 epoch 数
    pub fn max_epoch(mut self, max_epoch: usize) -> Self {
        self.max_epoch = Some(max_epoch);
        self
    }

    /// 设置初始权重（不设置则按标准正态分布随机生成）
    pub fn w_init(mut self, w_init: Array1<f64>) -> Self {
        self.w_init = Some(w_init.to_vec());
        self
    }

    /// 设置算法变体：`Adam` 或 `AdaMax`
    pub fn sub_mode(mut self, sub_mode: impl Into<String>) -> Self {
        self.sub_mode = Some(sub_mode.into());
        self
    }

    /// 设置一阶矩衰减率 β1
    pub fn beta1(mut self, beta1: f64) -> Self {
        self.beta1 = Some(beta1);
        self
    }

    /// 设置二阶矩（或无穷范数）衰减率 β2
    pub fn beta2(mut self, beta2: f64) -> Self {
        self.beta2 = Some(beta2);
        self
    }

    /// 设置数值稳定项 ε（仅 Adam 使用）
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// 设置参考最优值，用于计算最优性间隙
    pub fn f_sol(mut self, f_sol: f64) -> Self {
        self.f_sol = Some(f_sol);
        self
    }

    /// 设置每个 epoch 是否打乱样本顺序
    pub fn permute_on(mut self, permute_on: bool) -> Self {
        self.permute_on = Some(permute_on);
        self
    }

    /// 设置是否逐 epoch 打印进度
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// 设置随机种子（用于随机初始权重与样本打乱）
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 设置是否在历史记录中保存每个 epoch 的权重
    pub fn store_w(mut self, store_w: bool) -> Self {
        self.store_w = Some(store_w);
        self
    }

    /// 补全默认值并校验，得到完整配置
    ///
    /// 缺失的字段从不报错。只有会让迭代无法进行的取值才会报错：
    /// - 样本数为 0，或批大小为 0；
    /// - `w_init` 长度与问题维度不一致；
    /// - β1、β2 不在 [0, 1) 内（偏差修正的分母会为 0）；
    /// - 未知的算法变体。
    ///
    /// 批大小大于样本数是允许的：每个 epoch 没有批次，运行只能因 epoch 预算停止。
    pub fn resolve<P: Problem + ?Sized>(&self, problem: &P) -> Result<SolverConfig, SolverError> {
        let sub_mode = match &self.sub_mode {
            Some(token) => token.parse::<SubMode>()?,
            None => SubMode::default(),
        };
        let step_alg = self
            .step_alg
            .as_deref()
            .map(StepAlg::from_token)
            .unwrap_or_default();

        let sample_count = problem.sample_count();
        if sample_count == 0 {
            return Err(SolverError::InvalidConfig("问题的样本数为 0".to_string()));
        }
        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(SolverError::InvalidConfig("batch_size 必须大于 0".to_string()));
        }

        let w_init = match &self.w_init {
            Some(w) if w.len() != problem.dimension() => {
                return Err(SolverError::DimensionMismatch {
                    expected: problem.dimension(),
                    got: w.len(),
                });
            }
            Some(w) => Some(Array1::from(w.clone())),
            None => None,
        };

        let beta1 = self.beta1.unwrap_or(DEFAULT_BETA1);
        let beta2 = self.beta2.unwrap_or(DEFAULT_BETA2);
        check_value("beta1", beta1, ComparisonOperator::GreaterOrEqual, 0.0)?;
        check_value("beta1", beta1, ComparisonOperator::LessThan, 1.0)?;
        check_value("beta2", beta2, ComparisonOperator::GreaterOrEqual, 0.0)?;
        check_value("beta2", beta2, ComparisonOperator::LessThan, 1.0)?;

        Ok(SolverConfig {
            step: self.step.unwrap_or(DEFAULT_STEP),
            step_alg,
            lambda: self.lambda.unwrap_or(DEFAULT_LAMBDA),
            tol_optgap: self.tol_optgap.unwrap_or(DEFAULT_TOL_OPTGAP),
            batch_size,
            max_epoch: self.max_epoch,
            w_init,
            sub_mode,
            beta1,
            beta2,
            epsilon: self.epsilon.unwrap_or(DEFAULT_EPSILON),
            f_sol: self.f_sol.unwrap_or(f64::NEG_INFINITY),
            permute_on: self.permute_on.unwrap_or(true),
            verbose: self.verbose.unwrap_or(false),
            seed: self.seed,
            store_w: self.store_w.unwrap_or(false),
        })
    }
}

fn check_value(
    value_name: &str,
    value: f64,
    operator: ComparisonOperator,
    threshold: f64,
) -> Result<(), SolverError> {
    if operator.holds(value, threshold) {
        Ok(())
    } else {
        Err(SolverError::ValueMustSatisfyComparison {
            value_name: value_name.to_string(),
            operator,
            threshold,
            actual: value,
        })
    }
}

/// 补全默认值后的完整配置，求解期间只读
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverConfig {
    step: f64,
    step_alg: StepAlg,
    lambda: f64,
    tol_optgap: f64,
    batch_size: usize,
    max_epoch: Option<usize>,
    w_init: Option<Array1<f64>>,
    sub_mode: SubMode,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    f_sol: f64,
    permute_on: bool,
    verbose: bool,
    seed: Option<u64>,
    store_w: bool,
}

impl SolverConfig {
    /// 初始（或固定）步长
    pub const fn step(&self) -> f64 {
        self.step
    }

    pub const fn step_alg(&self) -> StepAlg {
        self.step_alg
    }

    pub const fn lambda(&self) -> f64 {
        self.lambda
    }

    pub const fn tol_optgap(&self) -> f64 {
        self.tol_optgap
    }

    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 最大 epoch 数，`None` 表示不限
    pub const fn max_epoch(&self) -> Option<usize> {
        self.max_epoch
    }

    /// 调用方给出的初始权重，`None` 表示由随机源生成
    pub fn w_init(&self) -> Option<&Array1<f64>> {
        self.w_init.as_ref()
    }

    pub const fn sub_mode(&self) -> SubMode {
        self.sub_mode
    }

    pub const fn beta1(&self) -> f64 {
        self.beta1
    }

    pub const fn beta2(&self) -> f64 {
        self.beta2
    }

    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub const fn f_sol(&self) -> f64 {
        self.f_sol
    }

    pub const fn permute_on(&self) -> bool {
        self.permute_on
    }

    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub const fn store_w(&self) -> bool {
        self.store_w
    }
}
