//! 问题（目标函数）模块
//!
//! 求解器本身不关心模型、数据如何定义，只通过 [`Problem`] 这一接口
//! 向外部“问题”索取目标值与梯度。
//!
//! # 主要组件
//!
//! - [`Problem`]: 经验风险目标的抽象（维度、样本数、目标值、批梯度）
//! - [`LinearRegression`]: 最小二乘线性回归，可作为参考实现与测试用例
//!
//! # 使用示例
//!
//! ```ignore
//! use adam_solver::problem::LinearRegression;
//!
//! let problem = LinearRegression::new(x_train, y_train)?;
//! let cost = problem.cost(&w)?;
//! let grad = problem.gradient(&w, &[0, 3, 5])?;
//! ```

mod linear_regression;

#[cfg(test)]
mod tests;

pub use linear_regression::LinearRegression;

use ndarray::Array1;

use crate::errors::SolverError;

/// 经验风险目标 `f(w) = 1/n · Σ f_i(w)` 的外部接口
///
/// # 约定
/// - `dimension()` 与 `sample_count()` 在一次求解过程中保持不变；
/// - `cost`、`gradient` 视为关于输入的纯函数（实现自身的随机性除外）；
/// - `gradient` 返回的向量长度必须等于 `dimension()`，
///   在给定样本下标集合上求平均或求和由实现自行决定。
pub trait Problem {
    /// 参数维度 `d`
    fn dimension(&self) -> usize;

    /// 样本数 `n`
    fn sample_count(&self) -> usize;

    /// 在全部样本上计算目标值
    fn cost(&self, w: &Array1<f64>) -> Result<f64, SolverError>;

    /// 在指定样本下标上计算（批）梯度
    fn gradient(&self, w: &Array1<f64>, indices: &[usize]) -> Result<Array1<f64>, SolverError>;
}
