//! Error types for embedding and search operations.

use thiserror::Error;

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Result type for shortest-path queries.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while computing a FastMap embedding.
#[derive(Debug, Error, PartialEq)]
pub enum EmbedError {
    /// The requested dimension count is zero.
    #[error("embedding dimension count must be at least 1")]
    InvalidK,

    /// The termination tolerance is not a positive finite number.
    #[error("epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    /// Pivot selection exhausted its retry budget without finding a
    /// connected pivot pair (e.g. every node is isolated).
    #[error("no usable pivot pair after {retries} retries")]
    DegenerateGraph {
        /// Number of reseeding attempts made.
        retries: usize,
    },
}

/// Errors that can occur during a shortest-path query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A query endpoint lies outside the graph's id space.
    #[error("node {node} out of range (graph has {cells} cells)")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Size of the graph's id space.
        cells: usize,
    },
}
