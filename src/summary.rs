//! Dataset summaries
//!
//! A serializable description of a loaded dataset, used by the CLI `info`
//! command and by callers that want to record what a training run read.

use crate::core::{LabelColumn, Result};
use crate::data::CSVDataset;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Serializable snapshot of a dataset's shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// File the dataset was loaded from
    pub source: Option<PathBuf>,
    /// Number of rows
    pub rows: usize,
    /// Field count of the first row, absent for an empty dataset
    pub columns: Option<usize>,
    /// Header row, when one was read
    pub headers: Option<Vec<String>>,
    /// Configured label column
    pub label_column: Option<LabelColumn>,
    /// Library version used to load the dataset
    pub library_version: String,
    /// Load timestamp (RFC 3339)
    pub loaded_at: String,
}

impl DatasetSummary {
    /// Summarize a loaded dataset
    pub fn from_dataset(dataset: &CSVDataset) -> Self {
        Self {
            source: dataset.source().map(Path::to_path_buf),
            rows: dataset.row_count(),
            columns: dataset.column_count().ok(),
            headers: dataset.headers().cloned(),
            label_column: dataset.label_column(),
            library_version: crate::VERSION.to_string(),
            loaded_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save summary to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Print a human-readable summary
    pub fn print_summary(&self) {
        println!("Dataset Summary:");
        if let Some(source) = &self.source {
            println!("  Source: {}", source.display());
        }
        println!("  Rows: {}", self.rows);
        match self.columns {
            Some(columns) => println!("  Columns: {columns}"),
            None => println!("  Columns: n/a (empty dataset)"),
        }
        if let Some(headers) = &self.headers {
            println!("  Headers: {}", headers.join(", "));
        }
        if let Some(label) = self.label_column {
            println!("  Label column: {label}");
        }
        println!("  Loaded at: {}", self.loaded_at);
    }
}
