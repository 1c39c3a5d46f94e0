//! Edge (boundary) behavior for border cells.

/// How the applier treats output cells whose 3x3 window leaves the grid.
///
/// Interior cells never touch the boundary, so their values are the same
/// under every variant. Only the first/last row and column differ.
///
/// # Examples
///
/// ```
/// use conv3_core::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::default(), EdgeBehavior::Absorb);
/// assert!(!EdgeBehavior::Absorb.computes_border());
/// assert!(EdgeBehavior::Wrap.computes_border());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Border cells are not computed. They hold `T::default()` and are
    /// reported as not computed by the output grid.
    #[default]
    Absorb,
    /// Out-of-bounds neighbors contribute zero.
    Zero,
    /// Out-of-bounds neighbor maps to the nearest boundary cell.
    Clamp,
    /// Out-of-bounds neighbor wraps to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Whether border cells get a value under this behavior.
    pub fn computes_border(self) -> bool {
        !matches!(self, Self::Absorb)
    }

    /// Resolve a single axis index under this behavior.
    ///
    /// Returns `Some(resolved)` for in-range values and for `Clamp`/`Wrap`,
    /// and `None` for out-of-range values under `Absorb` or `Zero`.
    /// `len` must be non-zero.
    pub fn resolve_axis(self, val: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if val >= 0 && val < n {
            return Some(val as usize);
        }
        match self {
            Self::Absorb | Self::Zero => None,
            Self::Clamp => Some(val.clamp(0, n - 1) as usize),
            Self::Wrap => Some(val.rem_euclid(n) as usize),
        }
    }
}
