//! High-level API for loading tabular datasets
//!
//! This module provides a builder over [`LoadOptions`] and a few one-call
//! helpers for the common cases.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabular::api::DatasetLoader;
//! use tabular::LabelColumn;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = DatasetLoader::new()
//!     .with_header(true)
//!     .with_label_column(LabelColumn::Last)
//!     .load("data.csv")?;
//!
//! println!("{} rows", dataset.row_count());
//! let sample = dataset.get(0)?;
//! let features: Vec<f64> = sample.parse_features()?;
//! # Ok(())
//! # }
//! ```

use crate::core::{LabelColumn, LoadOptions, Result};
use crate::data::CSVDataset;
use std::io::Read;
use std::path::Path;

/// Dataset path used by the binary when none is given
pub const DEFAULT_DATASET_PATH: &str = "./Pokemon_DB/pokemon.csv";

/// Builder for loading a [`CSVDataset`]
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    options: LoadOptions,
}

impl DatasetLoader {
    /// Create a loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit options
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Set field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Treat the first record as headers
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.options.has_header = has_header;
        self
    }

    /// Accept or reject rows with differing field counts
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.options.flexible = flexible;
        self
    }

    /// Accept files with zero records
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.options.allow_empty = allow_empty;
        self
    }

    /// Set the column holding the label for indexed access
    pub fn with_label_column(mut self, label_column: LabelColumn) -> Self {
        self.options.label_column = Some(label_column);
        self
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load a dataset from a file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<CSVDataset> {
        CSVDataset::from_file_with_options(path, self.options.clone())
    }

    /// Load a dataset from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<CSVDataset> {
        CSVDataset::from_reader(reader, self.options.clone())
    }
}

/// Convenience functions for common operations
pub mod quick {
    use super::*;

    /// Load a headerless CSV file with default options
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CSVDataset> {
        CSVDataset::from_file(path)
    }

    /// Load a CSV file whose last column is the label
    pub fn load_labeled_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<CSVDataset> {
        DatasetLoader::new()
            .with_header(has_header)
            .with_label_column(LabelColumn::Last)
            .load(path)
    }

    /// Count rows in a CSV file
    pub fn row_count<P: AsRef<Path>>(path: P) -> Result<usize> {
        Ok(load_csv(path)?.row_count())
    }
}
