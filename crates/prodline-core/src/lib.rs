//! # Production Line Core
//!
//! 產線核心資料模型與類型定義

pub mod catalog;
pub mod params;
pub mod process;
pub mod step;

// Re-export 主要類型
pub use catalog::default_steps;
pub use params::RunParameters;
pub use process::{MoveDirection, ProcessLine};
pub use step::StepDefinition;

/// 產線計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("無效的工序 '{step}': {reason}")]
    InvalidStep { step: String, reason: String },

    #[error("無效的運行參數: {0}")]
    InvalidParameter(String),

    #[error("製程沒有任何工序")]
    EmptyProcess,

    #[error("工序名稱重複: {0}")]
    DuplicateStep(String),

    #[error("找不到工序: {0}")]
    StepNotFound(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LineError {
    /// 建立工序驗證錯誤
    pub fn invalid_step(step: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStep {
            step: step.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LineError>;

/// 驗證整個工序序列（非空，且每道工序合法）
pub fn validate_steps(steps: &[StepDefinition]) -> Result<()> {
    if steps.is_empty() {
        return Err(LineError::EmptyProcess);
    }
    steps.iter().try_for_each(StepDefinition::validate)
}
