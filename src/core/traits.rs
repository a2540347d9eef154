//! Core traits for tabular datasets

use crate::core::{Result, Sample};

/// Indexed access to (features, label) samples for a training loop
pub trait Dataset: Send + Sync {
    /// Number of rows in the dataset
    fn len(&self) -> usize;

    /// Number of fields in the first row
    fn column_count(&self) -> Result<usize>;

    /// Get a single sample by index
    fn get_sample(&self, i: usize) -> Result<Sample>;

    /// Get multiple samples, failing on the first bad index
    fn get_batch(&self, indices: &[usize]) -> Result<Vec<Sample>> {
        indices.iter().map(|&i| self.get_sample(i)).collect()
    }

    /// Check if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
