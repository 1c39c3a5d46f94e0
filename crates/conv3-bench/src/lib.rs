//! Benchmark profiles for the conv3 stencil convolution.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with a 3x3 binomial blur
//! - [`stress_profile`]: 1000x1000 grid (1M cells) with a seeded kernel

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use conv3::{Grid, Kernel3};
use conv3_test_utils::{seeded_grid, seeded_kernel};

/// A benchmark input: one grid and one kernel.
pub struct Profile {
    /// Input grid.
    pub grid: Grid<i32>,
    /// Kernel applied to it.
    pub kernel: Kernel3,
}

/// 100x100 grid with values in `[-255, 255]` and the binomial blur kernel.
pub fn reference_profile(seed: u64) -> Profile {
    Profile {
        grid: seeded_grid(100, 100, 255, seed),
        kernel: Kernel3::new([[1, 2, 1], [2, 4, 2], [1, 2, 1]]),
    }
}

/// 1000x1000 grid with values in `[-4096, 4096]` and a seeded kernel.
pub fn stress_profile(seed: u64) -> Profile {
    Profile {
        grid: seeded_grid(1000, 1000, 4096, seed),
        kernel: seeded_kernel(16, seed.wrapping_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_shape() {
        let p = reference_profile(1);
        assert_eq!(p.grid.shape().cell_count(), 10_000);
        assert_eq!(p.kernel.weights()[1][1], 4);
    }
}
