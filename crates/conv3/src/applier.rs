//! The convolution kernel applier and its output grid.
//!
//! [`ConvolutionKernelApplier::apply`] computes, for every interior cell
//! `(i, j)` with `1 <= i <= rows-2` and `1 <= j <= cols-2`:
//!
//! ```text
//! out[i][j] = Σ_{di,dj ∈ {-1,0,1}} kernel[di+1][dj+1] * grid[i+di][j+dj]
//! ```
//!
//! Border cells follow the configured [`EdgeBehavior`].
//!
//! Constructed via the builder pattern: [`ConvolutionKernelApplier::builder`].

use crate::accumulate::{Accumulation, Accumulator, CheckedI32, WidenedI64, WrappingI32};
use crate::config::{ApplierConfig, ConfigError, Execution};
use crate::parallel::convolve_parallel;
use crate::stencil::{computed_rows, convolve_band};
use conv3_core::{EdgeBehavior, Grid, GridError, Kernel3, Shape};
use log::debug;

/// The result of one kernel application.
///
/// Owns a grid with the input's shape. Under [`EdgeBehavior::Absorb`] the
/// border cells are never computed: they hold `T::default()`, and
/// [`get`](Convolved::get) returns `None` for them. Use
/// [`grid`](Convolved::grid) or [`into_grid`](Convolved::into_grid) for
/// raw access, with the caveat that absorbed border cells carry no result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convolved<T> {
    grid: Grid<T>,
    edge: EdgeBehavior,
}

impl<T> Convolved<T> {
    /// Shape of the output, always equal to the input's.
    pub fn shape(&self) -> Shape {
        self.grid.shape()
    }

    /// Edge behavior the output was computed with.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `(row, col)` holds a computed value.
    pub fn is_computed(&self, row: usize, col: usize) -> bool {
        let shape = self.grid.shape();
        if self.edge.computes_border() {
            shape.index(row, col).is_some()
        } else {
            shape.is_interior(row, col)
        }
    }

    /// Computed value at `(row, col)`.
    ///
    /// `None` if out of range or if the cell was absorbed.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.is_computed(row, col) {
            self.grid.get(row, col)
        } else {
            None
        }
    }

    /// The underlying grid, border cells included.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Take ownership of the underlying grid.
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Iterate `(row, col, value)` over computed cells in row-major order.
    pub fn computed_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.grid.cols();
        self.grid
            .as_slice()
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / cols, i % cols, v))
            .filter(move |&(r, c, _)| self.is_computed(r, c))
    }
}

/// Applies a 3x3 weight kernel to integer grids.
///
/// Stateless apart from its configuration: every call allocates its own
/// output and never writes to the input, so one applier can serve many
/// threads.
///
/// # Examples
///
/// ```
/// use conv3::{ConvolutionKernelApplier, Grid, Kernel3, Shape};
///
/// let applier = ConvolutionKernelApplier::default();
/// let grid = Grid::filled(Shape::new(5, 5).unwrap(), 1);
/// let out = applier.apply(&grid, &Kernel3::splat(1)).unwrap();
/// assert_eq!(out.get(2, 2), Some(&9));
/// assert_eq!(out.get(0, 0), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvolutionKernelApplier {
    config: ApplierConfig,
}

/// Builder for [`ConvolutionKernelApplier`].
///
/// Every field has a default; see [`ApplierConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvolutionKernelApplierBuilder {
    config: ApplierConfig,
}

impl ConvolutionKernelApplierBuilder {
    /// Set the border behavior (default: `Absorb`).
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.config.edge = edge;
        self
    }

    /// Set the `i32` overflow policy (default: `Wrapping`).
    pub fn accumulation(mut self, accumulation: Accumulation) -> Self {
        self.config.accumulation = accumulation;
        self
    }

    /// Set sequential or parallel execution (default: `Sequential`).
    pub fn execution(mut self, execution: Execution) -> Self {
        self.config.execution = execution;
        self
    }

    /// Shorthand for `execution(Execution::Parallel { workers })`.
    pub fn workers(self, workers: usize) -> Self {
        self.execution(Execution::Parallel { workers })
    }

    /// Build the applier, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if parallel execution has zero workers or more than
    /// [`Execution::MAX_WORKERS`].
    pub fn build(self) -> Result<ConvolutionKernelApplier, ConfigError> {
        ConvolutionKernelApplier::new(self.config)
    }
}

impl ConvolutionKernelApplier {
    /// Create a new builder for configuring an applier.
    pub fn builder() -> ConvolutionKernelApplierBuilder {
        ConvolutionKernelApplierBuilder::default()
    }

    /// Create an applier from a complete configuration.
    pub fn new(config: ApplierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The applier's configuration.
    pub fn config(&self) -> &ApplierConfig {
        &self.config
    }

    /// Convolve `grid` with `kernel` into a fresh `i32` grid.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDimensions`] if the grid has fewer than 3 rows
    ///   or columns. Nothing is allocated in that case.
    /// - [`GridError::Overflow`] under [`Accumulation::Checked`] when a
    ///   cell's exact sum leaves the `i32` range. Intermediate terms may
    ///   exceed it without error.
    /// - [`GridError::WorkerFailed`] if a parallel worker panicked.
    pub fn apply(&self, grid: &Grid<i32>, kernel: &Kernel3) -> Result<Convolved<i32>, GridError> {
        match self.config.accumulation {
            Accumulation::Wrapping => self.run(grid, kernel, &WrappingI32),
            Accumulation::Checked => self.run(grid, kernel, &CheckedI32),
        }
    }

    /// Convolve with an `i64` accumulator into a fresh `i64` grid.
    ///
    /// Each window is summed exactly and fails only when the total leaves
    /// the `i64` range, which needs several products near `2^62`. That case
    /// is reported as [`GridError::Overflow`] regardless of the configured
    /// [`Accumulation`].
    pub fn apply_widened(
        &self,
        grid: &Grid<i32>,
        kernel: &Kernel3,
    ) -> Result<Convolved<i64>, GridError> {
        self.run(grid, kernel, &WidenedI64)
    }

    fn run<A: Accumulator>(
        &self,
        grid: &Grid<i32>,
        kernel: &Kernel3,
        acc: &A,
    ) -> Result<Convolved<A::Output>, GridError> {
        let shape = grid.shape();
        shape.check_stencil()?;

        let edge = self.config.edge;
        let rows = computed_rows(shape.rows(), edge);
        let workers = self.config.execution.resolved_workers(rows.len());
        debug!(
            "convolving {shape} grid: edge={edge:?} accumulation={:?} workers={workers}",
            self.config.accumulation
        );

        let mut out = vec![A::Output::default(); shape.cell_count()];
        if workers > 1 {
            convolve_parallel(grid, kernel, edge, acc, rows, workers, &mut out)?;
        } else {
            let cols = shape.cols();
            let band = &mut out[rows.start * cols..rows.end * cols];
            convolve_band(grid, kernel, edge, acc, rows, band)?;
        }

        Ok(Convolved {
            grid: Grid::from_vec(shape, out)?,
            edge,
        })
    }
}
