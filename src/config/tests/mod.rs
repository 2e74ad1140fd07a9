//! 配置模块单元测试


use ndarray::Array1;

use crate::errors::SolverError;
use crate::problem::Problem;

/// 只提供形状信息的问题，配置解析不会调用目标函数与梯度
pub(super) struct ShapeOnly {
    pub(super) dimension: usize,
    pub(super) sample_count: usize,
}

impl Problem for ShapeOnly {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn sample_count(&self) -> usize {
        self.sample_count
    }

    fn cost(&self, _w: &Array1<f64>) -> Result<f64, SolverError> {
        unreachable!("配置解析不应计算目标值")
    }

    fn gradient(&self, _w: &Array1<f64>, _indices: &[usize]) -> Result<Array1<f64>, SolverError> {
        unreachable!("配置解析不应计算梯度")
    }
}
