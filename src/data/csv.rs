//! CSV format dataset implementation
//!
//! Loads a delimited text file fully into memory where:
//! - Every record is a row of string fields, no type coercion
//! - Standard quoting applies (embedded delimiters, quotes and newlines)
//! - The first record is data unless a header row is requested
//! - Indexed access splits a row into features and a label using an
//!   explicitly configured label column

use crate::core::{Dataset, DatasetError, LabelColumn, LoadOptions, Result, Row, Sample};
use crate::summary::DatasetSummary;
use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Dataset implementation for CSV format files
#[derive(Debug, Clone)]
pub struct CSVDataset {
    rows: Vec<Row>,
    headers: Option<Row>,
    label_column: Option<LabelColumn>,
    source: Option<PathBuf>,
}

impl CSVDataset {
    /// Load a dataset from a CSV file with default options
    ///
    /// The first record is treated as data and no label column is set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_options(path, LoadOptions::default())
    }

    /// Load a dataset from a CSV file
    ///
    /// The file handle lives only for the duration of this call and is
    /// released on every return path, including parse failures.
    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening dataset file {path:?}");

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DatasetError::IoError(e),
        })?;

        let mut dataset = Self::from_reader(BufReader::new(file), options)?;
        dataset.source = Some(path.to_path_buf());
        Ok(dataset)
    }

    /// Load a dataset from any reader
    ///
    /// Blank lines are skipped rather than kept as zero-field rows, so
    /// `"1,2\n\n3,4\n"` yields two rows. Failures of the underlying reader
    /// surface as `IoError`; only malformed records are `Csv` errors.
    pub fn from_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(options.has_header)
            .flexible(options.flexible)
            .from_reader(reader);

        let headers = if options.has_header {
            let record = reader.headers().map_err(read_error)?;
            if record.is_empty() {
                None
            } else {
                Some(record.iter().map(String::from).collect::<Row>())
            }
        } else {
            None
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_error)?;
            rows.push(record.iter().map(String::from).collect::<Row>());
        }

        let mut dataset = Self::from_rows(rows, options)?;
        dataset.headers = headers;
        Ok(dataset)
    }

    /// Build a dataset from rows already in memory
    pub fn from_rows(rows: Vec<Row>, options: LoadOptions) -> Result<Self> {
        if rows.is_empty() && !options.allow_empty {
            return Err(DatasetError::EmptyDataset);
        }

        if let (Some(label), Some(first)) = (options.label_column, rows.first()) {
            if label.resolve(first.len()).is_none() {
                warn!(
                    "Label column {label} is outside the first row ({} fields)",
                    first.len()
                );
            }
        }

        let dataset = CSVDataset {
            rows,
            headers: None,
            label_column: options.label_column,
            source: None,
        };

        info!(
            "Loaded {} rows with {} columns",
            dataset.row_count(),
            dataset.column_count().unwrap_or(0)
        );

        Ok(dataset)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of fields in the first row
    pub fn column_count(&self) -> Result<usize> {
        self.rows
            .first()
            .map(Vec::len)
            .ok_or(DatasetError::IndexOutOfRange { index: 0, len: 0 })
    }

    /// Split the row at `index` into features and label
    pub fn get(&self, index: usize) -> Result<Sample> {
        let row = self.rows.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })?;

        let label = self
            .label_column
            .ok_or(DatasetError::LabelColumnNotConfigured)?;

        let label_index = label
            .resolve(row.len())
            .ok_or(DatasetError::ColumnOutOfRange {
                row: index,
                column: match label {
                    LabelColumn::Index(i) => i,
                    _ => 0,
                },
                width: row.len(),
            })?;

        Ok(Sample::from_row(row, label_index))
    }

    /// Raw row access
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Header row, when loaded with `has_header`
    pub fn headers(&self) -> Option<&Row> {
        self.headers.as_ref()
    }

    pub fn label_column(&self) -> Option<LabelColumn> {
        self.label_column
    }

    /// Path the dataset was read from, if it came from a file
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Iterate over every row as a split sample
    pub fn samples(&self) -> impl Iterator<Item = Result<Sample>> + '_ {
        (0..self.rows.len()).map(move |i| self.get(i))
    }

    /// Describe the dataset for reporting
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_dataset(self)
    }
}

/// Separate I/O failures from malformed CSV
fn read_error(err: csv::Error) -> DatasetError {
    if !err.is_io_error() {
        return DatasetError::Csv(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(e) => DatasetError::IoError(e),
        other => DatasetError::ParseError(format!("{other:?}")),
    }
}

impl Dataset for CSVDataset {
    fn len(&self) -> usize {
        self.row_count()
    }

    fn column_count(&self) -> Result<usize> {
        CSVDataset::column_count(self)
    }

    fn get_sample(&self, i: usize) -> Result<Sample> {
        self.get(i)
    }
}

impl<'a> IntoIterator for &'a CSVDataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
