//! Test utilities for conv3 development.
//!
//! Provides deterministic grid and kernel fixtures (see [`fixtures`]) and
//! [`reference_cell`], a literal 9-term weighted sum used as the oracle
//! in property tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{constant_grid, ramp_grid, seeded_grid, seeded_kernel};

use conv3_core::{Grid, Kernel3};

/// The weighted sum at interior cell `(i, j)`, written out term by term
/// in `i64` so it cannot overflow for `i32` inputs.
///
/// Panics if `(i, j)` is not an interior cell.
pub fn reference_cell(grid: &Grid<i32>, k: &Kernel3, i: usize, j: usize) -> i64 {
    assert!(
        grid.shape().is_interior(i, j),
        "({i}, {j}) is not an interior cell"
    );
    let w = |r: usize, c: usize| i64::from(k.weights()[r][c]);
    let g = |r: usize, c: usize| i64::from(grid[(r, c)]);
    w(0, 0) * g(i - 1, j - 1)
        + w(1, 0) * g(i, j - 1)
        + w(2, 0) * g(i + 1, j - 1)
        + w(0, 1) * g(i - 1, j)
        + w(1, 1) * g(i, j)
        + w(2, 1) * g(i + 1, j)
        + w(0, 2) * g(i - 1, j + 1)
        + w(1, 2) * g(i, j + 1)
        + w(2, 2) * g(i + 1, j + 1)
}
