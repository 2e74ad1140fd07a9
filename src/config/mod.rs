//! 配置模块
//!
//! 调用方只需给出关心的选项，其余全部按文档中的默认值补全。
//! 配置在求解开始前一次性解析为不可变的 [`SolverConfig`]，
//! 之后的迭代过程中不再检查或修改。
//!
//! # 主要组件
//!
//! - [`SolverOptions`]: 调用方给出的（部分）选项，支持链式设置或从 JSON 读取
//! - [`SolverConfig`]: 补全默认值并校验后的完整配置
//! - [`StepAlg`]: 步长策略（`fixed` / `decay`）
//! - [`SubMode`]: 算法变体（`Adam` / `AdaMax`）
//!
//! # 使用示例
//!
//! ```ignore
//! use adam_solver::config::SolverOptions;
//!
//! let config = SolverOptions::new()
//!     .step(0.01)
//!     .step_alg("decay")
//!     .batch_size(10)
//!     .max_epoch(100)
//!     .sub_mode("AdaMax")
//!     .resolve(&problem)?;
//! ```

mod modes;
mod options;

#[cfg(test)]
mod tests;

pub use modes::{StepAlg, SubMode};
pub use options::{SolverConfig, SolverOptions};
