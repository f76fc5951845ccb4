//! Error types for table mutations and configuration loading.
use thiserror::Error;

/// Top-level error type for the grid model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Row index {index} out of bounds for {len} rows")]
    RowIndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid config value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}
