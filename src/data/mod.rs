//! Data loading and dataset implementations
//!
//! This module provides implementations of the Dataset trait for delimited
//! text files.

pub mod csv;

pub use self::csv::*;
