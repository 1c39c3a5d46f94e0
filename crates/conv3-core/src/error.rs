//! Error types for grid construction and kernel application.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or convolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid is too small to have an interior cell.
    ///
    /// A 3x3 stencil needs at least three rows and three columns.
    InvalidDimensions {
        /// Row count of the offending shape.
        rows: usize,
        /// Column count of the offending shape.
        cols: usize,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A flat buffer does not match `rows * cols`.
    LengthMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A row in a nested-row constructor differs in length from row 0.
    RaggedRows {
        /// Index of the first mismatching row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the mismatching row.
        actual: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    CellCountOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Checked accumulation overflowed `i32` at the given output cell.
    Overflow {
        /// Row of the first overflowing cell.
        row: usize,
        /// Column of the first overflowing cell.
        col: usize,
    },
    /// A parallel worker exited without delivering its rows.
    WorkerFailed {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "invalid dimensions {rows}x{cols}: a 3x3 stencil needs at least 3x3"
                )
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match cell count {expected}")
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} columns, expected {expected}")
            }
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "cell count {rows}x{cols} overflows usize")
            }
            Self::Overflow { row, col } => {
                write!(f, "accumulator overflow at cell ({row}, {col})")
            }
            Self::WorkerFailed { reason } => write!(f, "worker failed: {reason}"),
        }
    }
}

impl Error for GridError {}
