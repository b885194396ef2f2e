// File: crates/column-core/src/error.rs
// Summary: Error taxonomy for dataset and configuration validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("dataset has {values} values but {labels} category labels")]
    LengthMismatch { values: usize, labels: usize },
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("value #{index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("value #{index} is negative ({value})")]
    NegativeValue { index: usize, value: f64 },
    #[error("value #{index} ({value}) is below the minimum {min}")]
    BelowMinimum { index: usize, value: f64, min: f64 },
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl ChartError {
    /// Errors caused by the dataset handed to `set_dataset` (as opposed to configuration).
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, ChartError::InvalidConfig { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
