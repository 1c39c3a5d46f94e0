//! Owned, contiguous, row-major two-dimensional grid.

use crate::error::GridError;
use crate::shape::Shape;
use std::ops::{Index, IndexMut};

/// A rectangular grid stored as one row-major buffer.
///
/// Cell `(row, col)` lives at `row * cols + col`. Indexing with
/// `grid[(row, col)]` panics on out-of-range coordinates, like slice
/// indexing; use [`Grid::get`] for a fallible lookup.
///
/// # Examples
///
/// ```
/// use conv3_core::Grid;
///
/// let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(g.rows(), 2);
/// assert_eq!(g.cols(), 3);
/// assert_eq!(g[(1, 2)], 6);
/// assert_eq!(g.get(2, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T = i32> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a flat row-major buffer.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `data.len()` is not
    /// `shape.cell_count()`.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != shape.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: shape.cell_count(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let shape = Shape::new(n_rows, n_cols)?;
        let mut data = Vec::with_capacity(shape.cell_count());
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::RaggedRows {
                    row: r,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { shape, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.cell_count());
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                data.push(f(r, c));
            }
        }
        Self { shape, data }
    }

    /// Shape of the grid.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.shape.index(row, col).map(|i| &self.data[i])
    }

    /// Mutable cell at `(row, col)`, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let i = self.shape.index(row, col)?;
        Some(&mut self.data[i])
    }

    /// One row as a slice. Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        let cols = self.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols())
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Grid<T> {
    /// A grid of `shape` with every cell set to `value`.
    pub fn filled(shape: Shape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.cell_count()],
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({row}, {col}) out of bounds for {} grid",
            self.shape
        );
        &self.data[row * self.cols() + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({row}, {col}) out of bounds for {} grid",
            self.shape
        );
        let cols = self.cols();
        &mut self.data[row * cols + col]
    }
}
