/*
 * @Author       : 老董
 * @Date         : 2026-10-13
 * @Description  : 求解器模块单元测试
 *
 * 测试按功能分组：
 * - schedule: 步长调度
 * - moment: Adam / AdaMax 矩估计与参数更新
 * - iteration: 样本顺序与批次切分
 * - convergence: 收敛判定
 * - history: 历史记录
 * - driver: 完整求解流程
 */

mod convergence;
mod history;
mod schedule;

use std::cell::{Cell, RefCell};

use ndarray::{Array1, Array2, Axis};

use crate::errors::SolverError;
use crate::problem::Problem;
use crate::solver::Clock;

/// 测试用二次问题：f(w) = 1/(2n) · Σ‖w − a_i‖²，最优点为各 a_i 的均值
///
/// 会记录每次传给 `gradient` 的样本下标
pub(super) struct RecordingQuadratic {
    centers: Array2<f64>,
    gradient_calls: RefCell<Vec<Vec<usize>>>,
}

impl RecordingQuadratic {
    pub(super) fn new(centers: Array2<f64>) -> Self {
        Self {
            centers,
            gradient_calls: RefCell::new(Vec::new()),
        }
    }

    /// 4 个二维样本，均值为 (1.5, -0.5)
    pub(super) fn small() -> Self {
        Self::new(
            Array2::from_shape_vec((4, 2), vec![1.0, -2.0, 3.0, 0.0, 2.0, 1.0, 0.0, -1.0])
                .unwrap(),
        )
    }

    /// `n` 个一维样本，第 i 个样本为 i
    pub(super) fn line(n: usize) -> Self {
        Self::new(Array2::from_shape_fn((n, 1), |(i, _)| i as f64))
    }

    pub(super) fn optimum(&self) -> Array1<f64> {
        self.centers.mean_axis(Axis(0)).unwrap()
    }

    pub(super) fn min_cost(&self) -> f64 {
        self.cost(&self.optimum()).unwrap()
    }

    pub(super) fn gradient_calls(&self) -> Vec<Vec<usize>> {
        self.gradient_calls.borrow().clone()
    }
}

impl Problem for RecordingQuadratic {
    fn dimension(&self) -> usize {
        self.centers.ncols()
    }

    fn sample_count(&self) -> usize {
        self.centers.nrows()
    }

    fn cost(&self, w: &Array1<f64>) -> Result<f64, SolverError> {
        let total: f64 = self
            .centers
            .rows()
            .into_iter()
            .map(|c| (w - &c).mapv(|x| x * x).sum())
            .sum();
        Ok(total / (2.0 * self.sample_count() as f64))
    }

    fn gradient(&self, w: &Array1<f64>, indices: &[usize]) -> Result<Array1<f64>, SolverError> {
        self.gradient_calls.borrow_mut().push(indices.to_vec());
        let mut grad = Array1::<f64>::zeros(self.dimension());
        for &i in indices {
            grad += &(w - &self.centers.row(i));
        }
        Ok(grad / indices.len() as f64)
    }
}

/// 测试用计时源：每读取一次时间前进 1 秒
#[derive(Default)]
pub(super) struct TickClock {
    ticks: Cell<u32>,
}

impl Clock for TickClock {
    fn start(&mut self) {
        self.ticks.set(0);
    }

    fn elapsed(&self) -> f64 {
        self.ticks.set(self.ticks.get() + 1);
        f64::from(self.ticks.get())
    }
}
