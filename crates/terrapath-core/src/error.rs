//! Error types for grid construction.

use thiserror::Error;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while constructing a [`TerrainGrid`](crate::TerrainGrid).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A row's length differs from the first row's.
    #[error("row {row} has {len} symbols, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Symbol count of that row.
        len: usize,
        /// Expected width, taken from the first row.
        expected: usize,
    },
}
