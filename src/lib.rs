//! # Adam Solver
//!
//! `adam_solver`是一个基于矩估计的随机一阶优化求解器：通过外部“问题”提供的目标值与（批）梯度，
//! 以 mini-batch 方式最小化经验风险。支持两种更新规则，在配置时二选一：
//! - `Adam`：一阶矩 + 二阶矩；
//! - `AdaMax`：一阶矩 + 无穷范数。
//!
//! 模型定义、数据加载、分布式训练与超参数搜索均不在本库范围内，由调用方负责。
//!
//! ```ignore
//! use adam_solver::config::SolverOptions;
//! use adam_solver::problem::LinearRegression;
//! use adam_solver::solver::minimize;
//!
//! let problem = LinearRegression::new(x, y)?;
//! let result = minimize(&problem, &SolverOptions::new().batch_size(10).max_epoch(100))?;
//! println!("{}", result.history.to_json()?);
//! ```

pub mod config;
pub mod errors;
pub mod problem;
pub mod solver;
pub mod utils;
