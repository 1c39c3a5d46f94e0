//! Reusable grid and kernel fixtures.
//!
//! - [`constant_grid`]: every cell the same value.
//! - [`ramp_grid`]: cell `(r, c)` holds `r * cols + c`.
//! - [`seeded_grid`] / [`seeded_kernel`]: deterministic pseudo-random
//!   values from a ChaCha8 stream, identical for identical seeds.

use conv3_core::{Grid, Kernel3, Shape};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn shape(rows: usize, cols: usize) -> Shape {
    Shape::new(rows, cols).unwrap_or_else(|e| panic!("fixture shape {rows}x{cols}: {e}"))
}

/// A `rows x cols` grid with every cell set to `value`.
pub fn constant_grid(rows: usize, cols: usize, value: i32) -> Grid<i32> {
    Grid::filled(shape(rows, cols), value)
}

/// A `rows x cols` grid where cell `(r, c)` holds `r * cols + c`.
pub fn ramp_grid(rows: usize, cols: usize) -> Grid<i32> {
    Grid::from_fn(shape(rows, cols), |r, c| (r * cols + c) as i32)
}

/// Draw a value from `[-bound, bound]`; `bound` saturates at `i32::MAX`.
fn draw(rng: &mut ChaCha8Rng, bound: u32) -> i32 {
    let bound = i64::from(bound.min(i32::MAX as u32));
    let span = (bound * 2 + 1) as u64;
    ((rng.next_u64() % span) as i64 - bound) as i32
}

/// A `rows x cols` grid of values in `[-bound, bound]`, seeded by `seed`.
pub fn seeded_grid(rows: usize, cols: usize, bound: u32, seed: u64) -> Grid<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(shape(rows, cols), |_, _| draw(&mut rng, bound))
}

/// A kernel with weights in `[-bound, bound]`, seeded by `seed`.
pub fn seeded_kernel(bound: u32, seed: u64) -> Kernel3 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut weights = [[0i32; 3]; 3];
    for row in weights.iter_mut() {
        for w in row.iter_mut() {
            *w = draw(&mut rng, bound);
        }
    }
    Kernel3::new(weights)
}
