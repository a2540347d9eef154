//! Error types for dataset loading and access

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Column {column} out of range for row {row} with {width} fields")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    #[error("Label column not configured")]
    LabelColumnNotConfigured,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
