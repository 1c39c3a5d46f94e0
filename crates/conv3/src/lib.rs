//! 3x3 integer stencil convolution.
//!
//! Applies a [`Kernel3`] of integer weights to a [`Grid`] of `i32`
//! samples, producing a same-shape [`Convolved`] grid whose interior cells
//! hold the 9-term weighted sum of their neighborhood.
//!
//! # Border cells
//!
//! The window of a border cell leaves the grid. [`EdgeBehavior::Absorb`]
//! (the default) skips those cells and marks them not computed;
//! `Zero`, `Clamp` and `Wrap` compute them with the matching padding.
//!
//! # Overflow
//!
//! [`Accumulation::Wrapping`] (the default) wraps on `i32` overflow;
//! [`Accumulation::Checked`] reports the first cell whose exact sum does
//! not fit `i32`; and [`ConvolutionKernelApplier::apply_widened`] returns
//! `i64` cells.
//!
//! ```
//! use conv3::{Grid, Kernel3};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1, 2, 3],
//!     vec![4, 5, 6],
//!     vec![7, 8, 9],
//! ]).unwrap();
//! let out = conv3::apply(&grid, &Kernel3::splat(1)).unwrap();
//! assert_eq!(out.get(1, 1), Some(&45));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod accumulate;
pub mod applier;
pub mod config;
mod parallel;
mod stencil;

pub use accumulate::Accumulation;
pub use applier::{Convolved, ConvolutionKernelApplier, ConvolutionKernelApplierBuilder};
pub use config::{ApplierConfig, ConfigError, Execution};
pub use conv3_core::{EdgeBehavior, Grid, GridError, Kernel3, Shape};

/// Convolve with the default configuration: absorbed borders, wrapping
/// `i32` arithmetic, sequential execution.
pub fn apply(grid: &Grid<i32>, kernel: &Kernel3) -> Result<Convolved<i32>, GridError> {
    ConvolutionKernelApplier::default().apply(grid, kernel)
}
