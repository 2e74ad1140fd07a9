use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 求解器相关错误
///
/// 缺省的配置项从不报错（会被静默补全为默认值），
/// 这里只收录确实无法继续运行的情形。
#[derive(Error, Debug)]
pub enum SolverError {
    // 数值型超参数的取值约束
    #[error("{value_name}须{operator}{threshold}，实际为{actual}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: f64,
        actual: f64,
    },
    #[error("配置无效：{0}")]
    InvalidConfig(String),
    #[error("未知的算法变体`{0}`，仅支持`Adam`或`AdaMax`")]
    UnknownSubMode(String),

    // 问题（目标函数/梯度）相关
    #[error("维度不匹配：期望{expected}，实际{got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("目标函数/梯度计算失败：{0}")]
    Oracle(String),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
