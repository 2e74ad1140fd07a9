/*
 * @Author       : 老董
 * @Date         : 2026-10-11
 * @Description  : 最小二乘线性回归问题
 *
 * f(w)   = 1/(2n) · ‖Xw − y‖²
 * ∇f_B(w) = 1/|B| · Σ_{i∈B} x_i (x_iᵀw − y_i)
 */

use ndarray::{Array1, Array2, Axis};

use super::Problem;
use crate::errors::SolverError;

/// 最小二乘线性回归
///
/// # 示例
/// ```ignore
/// let problem = LinearRegression::new(features, targets)?;
/// assert_eq!(problem.dimension(), features.ncols());
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// 特征矩阵，形状为 `[n, d]`
    features: Array2<f64>,
    /// 目标值，长度为 `n`
    targets: Array1<f64>,
}

impl LinearRegression {
    /// 创建新的线性回归问题
    ///
    /// # 参数
    /// - `features`: 特征矩阵，每行一个样本
    /// - `targets`: 目标值，长度须与样本数一致
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self, SolverError> {
        if features.nrows() != targets.len() {
            return Err(SolverError::DimensionMismatch {
                expected: features.nrows(),
                got: targets.len(),
            });
        }
        Ok(Self { features, targets })
    }

    /// 获取特征矩阵引用
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// 获取目标值引用
    pub fn targets(&self) -> &Array1<f64> {
        &self.targets
    }

    /// 残差 `Xw − y`
    fn residuals(&self, w: &Array1<f64>) -> Result<Array1<f64>, SolverError> {
        self.check_dimension(w)?;
        Ok(self.features.dot(w) - &self.targets)
    }

    fn check_dimension(&self, w: &Array1<f64>) -> Result<(), SolverError> {
        if w.len() != self.features.ncols() {
            return Err(SolverError::DimensionMismatch {
                expected: self.features.ncols(),
                got: w.len(),
            });
        }
        Ok(())
    }
}

impl Problem for LinearRegression {
    fn dimension(&self) -> usize {
        self.features.ncols()
    }

    fn sample_count(&self) -> usize {
        self.features.nrows()
    }

    fn cost(&self, w: &Array1<f64>) -> Result<f64, SolverError> {
        let r = self.residuals(w)?;
        Ok(r.dot(&r) / (2.0 * self.sample_count() as f64))
    }

    fn gradient(&self, w: &Array1<f64>, indices: &[usize]) -> Result<Array1<f64>, SolverError> {
        self.check_dimension(w)?;
        if indices.is_empty() {
            return Err(SolverError::Oracle("样本下标集合为空".to_string()));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.sample_count()) {
            return Err(SolverError::Oracle(format!(
                "样本下标越界: {} >= {}",
                bad,
                self.sample_count()
            )));
        }

        let x_batch = self.features.select(Axis(0), indices);
        let y_batch = self.targets.select(Axis(0), indices);
        let residuals = x_batch.dot(w) - &y_batch;
        Ok(x_batch.t().dot(&residuals) / indices.len() as f64)
    }
}
