//! The 3x3 integer weight kernel.

use std::ops::Add;

/// A 3x3 grid of signed integer weights.
///
/// Indexed `[row][col]`: row `dr + 1` is the vertical offset and col
/// `dc + 1` the horizontal offset of the neighbor the weight applies to.
/// Weights carry no normalization, symmetry or sign constraint.
///
/// # Examples
///
/// ```
/// use conv3_core::Kernel3;
///
/// let k = Kernel3::identity() + Kernel3::splat(1);
/// assert_eq!(k.weight(0, 0), 2);
/// assert_eq!(k.weight(-1, 1), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Kernel3 {
    weights: [[i32; 3]; 3],
}

/// Window offsets in the order cells are accumulated: column-major,
/// all three rows for `dc = -1`, then `dc = 0`, then `dc = 1`.
pub const WINDOW_OFFSETS: [(isize, isize); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Kernel3 {
    /// Wrap a `[row][col]` weight array.
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// All weights zero.
    pub const fn zero() -> Self {
        Self::splat(0)
    }

    /// Every weight set to `w`.
    pub const fn splat(w: i32) -> Self {
        Self::new([[w; 3]; 3])
    }

    /// Center weight `w`, all others zero.
    pub const fn scaled_identity(w: i32) -> Self {
        Self::new([[0, 0, 0], [0, w, 0], [0, 0, 0]])
    }

    /// Center weight 1, all others zero.
    pub const fn identity() -> Self {
        Self::scaled_identity(1)
    }

    /// Weight applied to the neighbor at offset `(dr, dc)`.
    ///
    /// Panics unless both offsets are in `-1..=1`.
    pub fn weight(&self, dr: isize, dc: isize) -> i32 {
        assert!(
            (-1..=1).contains(&dr) && (-1..=1).contains(&dc),
            "kernel offset ({dr}, {dc}) outside 3x3 window"
        );
        self.weights[(dr + 1) as usize][(dc + 1) as usize]
    }

    /// The raw `[row][col]` weights.
    pub fn weights(&self) -> &[[i32; 3]; 3] {
        &self.weights
    }

    /// Weights paired with their offsets, in accumulation order.
    pub fn taps(&self) -> [(isize, isize, i32); 9] {
        WINDOW_OFFSETS.map(|(dr, dc)| (dr, dc, self.weight(dr, dc)))
    }
}

impl From<[[i32; 3]; 3]> for Kernel3 {
    fn from(weights: [[i32; 3]; 3]) -> Self {
        Self::new(weights)
    }
}

/// Element-wise sum. Wraps on `i32` overflow.
impl Add for Kernel3 {
    type Output = Kernel3;

    fn add(self, rhs: Kernel3) -> Kernel3 {
        let mut weights = self.weights;
        for (row, rhs_row) in weights.iter_mut().zip(rhs.weights.iter()) {
            for (w, r) in row.iter_mut().zip(rhs_row.iter()) {
                *w = w.wrapping_add(*r);
            }
        }
        Kernel3 { weights }
    }
}
