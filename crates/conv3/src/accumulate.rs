//! Accumulator arithmetic for the 9-term weighted sum.
//!
//! The stencil loop is generic over [`Accumulator`] so the same code path
//! serves wrapping `i32`, checked `i32` and checked `i64` output. Checked
//! variants sum the window exactly in `i128` and range-check once, so the
//! result never depends on tap order.

/// Integer overflow policy for `i32` output grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accumulation {
    /// Two's-complement wrapping on overflow. Never fails.
    #[default]
    Wrapping,
    /// Fail with [`GridError::Overflow`](conv3_core::GridError::Overflow)
    /// at the first cell whose exact sum leaves the `i32` range.
    /// Intermediate products and partial sums may exceed it.
    Checked,
}

/// Running sum of one window plus the final conversion to a cell value.
pub(crate) trait Accumulator: Sync {
    /// Running-sum type for a single window.
    type Sum: Copy + Default;
    /// Cell type of the output grid.
    type Output: Copy + Default + Send;

    /// Add `weight * value` to `sum`.
    fn tap(&self, sum: Self::Sum, weight: i32, value: i32) -> Self::Sum;

    /// Convert a finished window sum. `None` signals overflow.
    fn finish(&self, sum: Self::Sum) -> Option<Self::Output>;
}

pub(crate) struct WrappingI32;

impl Accumulator for WrappingI32 {
    type Sum = i32;
    type Output = i32;

    #[inline]
    fn tap(&self, sum: i32, weight: i32, value: i32) -> i32 {
        sum.wrapping_add(weight.wrapping_mul(value))
    }

    #[inline]
    fn finish(&self, sum: i32) -> Option<i32> {
        Some(sum)
    }
}

/// Exact window sum. Nine products of two `i32` stay below `2^66`.
#[inline]
fn exact_tap(sum: i128, weight: i32, value: i32) -> i128 {
    sum + i128::from(weight) * i128::from(value)
}

pub(crate) struct CheckedI32;

impl Accumulator for CheckedI32 {
    type Sum = i128;
    type Output = i32;

    #[inline]
    fn tap(&self, sum: i128, weight: i32, value: i32) -> i128 {
        exact_tap(sum, weight, value)
    }

    #[inline]
    fn finish(&self, sum: i128) -> Option<i32> {
        i32::try_from(sum).ok()
    }
}

/// `i64` output. Only a window whose exact sum exceeds `i64` fails,
/// which needs several products near `2^62`.
pub(crate) struct WidenedI64;

impl Accumulator for WidenedI64 {
    type Sum = i128;
    type Output = i64;

    #[inline]
    fn tap(&self, sum: i128, weight: i32, value: i32) -> i128 {
        exact_tap(sum, weight, value)
    }

    #[inline]
    fn finish(&self, sum: i128) -> Option<i64> {
        i64::try_from(sum).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<A: Accumulator>(acc: &A, taps: &[(i32, i32)]) -> Option<A::Output> {
        let sum = taps
            .iter()
            .fold(A::Sum::default(), |s, &(w, v)| acc.tap(s, w, v));
        acc.finish(sum)
    }

    #[test]
    fn wrapping_wraps() {
        assert_eq!(fold(&WrappingI32, &[(1, i32::MAX), (1, 1)]), Some(i32::MIN));
        assert_eq!(fold(&WrappingI32, &[(i32::MAX, 2)]), Some(-2));
    }

    #[test]
    fn checked_rejects_only_out_of_range_totals() {
        assert_eq!(fold(&CheckedI32, &[(1, i32::MAX), (1, 1)]), None);
        assert_eq!(fold(&CheckedI32, &[(i32::MAX, 2)]), None);
        assert_eq!(fold(&CheckedI32, &[(5, 1), (3, -2)]), Some(-1));
    }

    #[test]
    fn checked_tolerates_intermediate_overflow() {
        // Partial sum passes i32::MAX before the last tap brings it back.
        assert_eq!(
            fold(&CheckedI32, &[(1, i32::MAX), (1, 1), (1, -1)]),
            Some(i32::MAX)
        );
        // Each product overflows i32 but they cancel.
        assert_eq!(fold(&CheckedI32, &[(2, i32::MAX), (-2, i32::MAX)]), Some(0));
    }

    #[test]
    fn checked_is_order_independent() {
        let taps = [(1, i32::MAX), (1, 1), (1, -1)];
        let mut reversed = taps;
        reversed.reverse();
        assert_eq!(fold(&CheckedI32, &taps), fold(&CheckedI32, &reversed));
    }

    #[test]
    fn widened_holds_products_of_extremes() {
        let p = fold(&WidenedI64, &[(i32::MIN, i32::MIN)]).unwrap();
        assert_eq!(p, 1i64 << 62);
        assert_eq!(fold(&WidenedI64, &[(i32::MIN, i32::MIN); 2]), None);
        // Partial sum reaches 2^63 before the negative product.
        let taps = [
            (i32::MIN, i32::MIN),
            (i32::MIN, i32::MIN),
            (i32::MIN, i32::MAX),
        ];
        assert_eq!(fold(&WidenedI64, &taps), Some((1i64 << 62) + (1i64 << 31)));
    }
}
