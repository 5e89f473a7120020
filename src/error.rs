//! Error types for matrix construction and multiplication.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: A is {}x{}, B is {}x{}", .a.0, .a.1, .b.0, .b.1)]
    DimensionMismatch { a: (usize, usize), b: (usize, usize) },

    #[error("matrix of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("integer overflow computing C[{row}][{col}]")]
    Overflow { row: usize, col: usize },

    #[error("row unit {row} panicked: {message}")]
    RowPanicked { row: usize, message: String },

    #[error("could not start a thread for row {row}: {message}")]
    Spawn { row: usize, message: String },

    #[error("barrier released after {completed} of {expected} row units")]
    IncompleteBarrier { completed: usize, expected: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
