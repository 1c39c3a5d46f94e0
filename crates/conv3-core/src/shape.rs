//! Runtime grid shape descriptor.

use crate::error::GridError;
use std::fmt;

/// Row and column counts of a rectangular grid.
///
/// A `Shape` always describes at least one cell and a cell count that fits
/// in `usize`. [`Shape::stencil`] further requires room for a 3x3 window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Smallest extent along either axis that leaves an interior cell.
    pub const MIN_STENCIL_DIM: usize = 3;

    /// Create a shape with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::CellCountOverflow)` if the product overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::CellCountOverflow { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Create a shape that admits at least one interior cell.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is
    /// below [`Shape::MIN_STENCIL_DIM`].
    pub fn stencil(rows: usize, cols: usize) -> Result<Self, GridError> {
        let shape = Self::new(rows, cols).map_err(|e| match e {
            GridError::EmptyGrid => GridError::InvalidDimensions { rows, cols },
            other => other,
        })?;
        shape.check_stencil()?;
        Ok(shape)
    }

    /// Fail with `InvalidDimensions` unless a 3x3 window fits.
    pub fn check_stencil(&self) -> Result<(), GridError> {
        if self.rows < Self::MIN_STENCIL_DIM || self.cols < Self::MIN_STENCIL_DIM {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat row-major index of `(row, col)`, or `None` if out of range.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Whether `(row, col)` lies strictly inside the outermost ring.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row + 1 < self.rows && col + 1 < self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
