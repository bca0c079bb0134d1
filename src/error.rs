//! Error types for coordinate table loading

use thiserror::Error;

/// Errors surfaced while loading a coordinate table.
///
/// A single malformed row rejects the whole table; rows are never
/// skipped silently.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A row's field count does not match the declared table shape
    #[error("expected {expected} columns but row {row} has {found}")]
    Schema {
        expected: usize,
        found: usize,
        row: usize,
    },

    /// A field could not be parsed as a number
    #[error("row {row}, column {column}: '{value}' is not numeric")]
    Parse {
        row: usize,
        column: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The reader itself rejected the input
    #[error("failed to read input: {0}")]
    Read(#[from] csv::Error),
}
