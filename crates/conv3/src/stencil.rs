//! The 3x3 window gather and weighted sum over a band of output rows.

use crate::accumulate::Accumulator;
use conv3_core::{EdgeBehavior, Grid, GridError, Kernel3};
use std::ops::Range;

/// Rows of the output that receive values under `edge`.
///
/// `Absorb` only computes rows `1..rows-1`; every other behavior computes
/// all rows. Callers must have checked that the grid is at least 3x3.
pub(crate) fn computed_rows(rows: usize, edge: EdgeBehavior) -> Range<usize> {
    if edge.computes_border() {
        0..rows
    } else {
        1..rows - 1
    }
}

/// Weighted sum of the 3x3 window centered on `(row, col)`.
///
/// Neighbor coordinates go through [`EdgeBehavior::resolve_axis`];
/// unresolved neighbors contribute nothing. `None` signals that the
/// finished sum does not fit the accumulator's output type.
pub(crate) fn window_sum<A: Accumulator>(
    input: &Grid<i32>,
    kernel: &Kernel3,
    edge: EdgeBehavior,
    acc: &A,
    row: usize,
    col: usize,
) -> Option<A::Output> {
    let (rows, cols) = (input.rows(), input.cols());
    let mut sum = A::Sum::default();
    for (dr, dc, weight) in kernel.taps() {
        let nr = edge.resolve_axis(row as isize + dr, rows);
        let nc = edge.resolve_axis(col as isize + dc, cols);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            sum = acc.tap(sum, weight, input[(nr, nc)]);
        }
    }
    acc.finish(sum)
}

/// Fill `out` with the convolved values of `band`.
///
/// `out` holds exactly `band.len() * cols` cells, row-major, starting at
/// `band.start`. Under `Absorb`, border columns are left untouched.
pub(crate) fn convolve_band<A: Accumulator>(
    input: &Grid<i32>,
    kernel: &Kernel3,
    edge: EdgeBehavior,
    acc: &A,
    band: Range<usize>,
    out: &mut [A::Output],
) -> Result<(), GridError> {
    let cols = input.cols();
    debug_assert_eq!(out.len(), band.len() * cols);
    let col_range = if edge.computes_border() {
        0..cols
    } else {
        1..cols - 1
    };

    for (row, out_row) in band.zip(out.chunks_mut(cols)) {
        for col in col_range.clone() {
            out_row[col] = window_sum(input, kernel, edge, acc, row, col)
                .ok_or(GridError::Overflow { row, col })?;
        }
    }
    Ok(())
}
