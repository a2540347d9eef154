//! Core type definitions for tabular datasets

use crate::core::{DatasetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One parsed record, fields kept as strings
pub type Row = Vec<String>;

/// Which column of a row holds the label
///
/// Every other column is treated as a feature, in its original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColumn {
    /// Column 0 is the label
    First,
    /// The final column of each row is the label
    Last,
    /// A fixed zero-based column index
    Index(usize),
}

impl LabelColumn {
    /// Resolve to a concrete column index for a row of `width` fields
    ///
    /// Returns `None` when the row is too narrow to contain the label.
    pub fn resolve(&self, width: usize) -> Option<usize> {
        match *self {
            LabelColumn::First if width > 0 => Some(0),
            LabelColumn::Last if width > 0 => Some(width - 1),
            LabelColumn::Index(i) if i < width => Some(i),
            _ => None,
        }
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelColumn::First => write!(f, "first"),
            LabelColumn::Last => write!(f, "last"),
            LabelColumn::Index(i) => write!(f, "{i}"),
        }
    }
}

impl FromStr for LabelColumn {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(LabelColumn::First),
            "last" => Ok(LabelColumn::Last),
            other => other.parse::<usize>().map(LabelColumn::Index).map_err(|_| {
                DatasetError::InvalidParameter(format!(
                    "label column must be 'first', 'last' or an index, got '{s}'"
                ))
            }),
        }
    }
}

/// A row split into features and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Feature fields (row minus the label column)
    pub features: Vec<String>,
    /// Label field
    pub label: String,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: Vec<String>, label: String) -> Self {
        Self { features, label }
    }

    /// Split a row at `label_index`, which callers resolve against the row first
    pub(crate) fn from_row(row: &[String], label_index: usize) -> Self {
        let features = row
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != label_index)
            .map(|(_, field)| field.clone())
            .collect();
        Self::new(features, row[label_index].clone())
    }

    /// Parse every feature field into `T`
    pub fn parse_features<T: FromStr>(&self) -> Result<Vec<T>> {
        self.features
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                field.trim().parse::<T>().map_err(|_| {
                    DatasetError::ParseError(format!(
                        "Invalid feature value at column {}: {}",
                        idx + 1,
                        field
                    ))
                })
            })
            .collect()
    }

    /// Parse the label field into `T`
    pub fn parse_label<T: FromStr>(&self) -> Result<T> {
        self.label
            .trim()
            .parse::<T>()
            .map_err(|_| DatasetError::ParseError(format!("Invalid label: {}", self.label)))
    }

    /// Number of feature fields
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}

/// Options controlling how a delimited file is read
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Treat the first record as headers instead of data
    pub has_header: bool,
    /// Accept records with differing field counts
    pub flexible: bool,
    /// Accept files with zero records
    pub allow_empty: bool,
    /// Feature/label split rule used by indexed access
    pub label_column: Option<LabelColumn>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
            flexible: true,
            allow_empty: false,
            label_column: None,
        }
    }
}
