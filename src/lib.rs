//! Tabular dataset loading for training loops
//!
//! Reads a delimited text file into memory as rows of string fields and
//! exposes row/column counts plus indexed (features, label) access.

pub mod api;
pub mod core;
pub mod data;
pub mod summary;

// Re-export main types for convenience
pub use crate::api::{DatasetLoader, DEFAULT_DATASET_PATH};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{DatasetError, Result};
pub use crate::data::CSVDataset;
pub use crate::summary::DatasetSummary;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
