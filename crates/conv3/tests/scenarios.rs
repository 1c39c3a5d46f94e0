//! Concrete end-to-end scenarios through the public API.

use conv3::{
    Accumulation, ConvolutionKernelApplier, EdgeBehavior, Execution, Grid, GridError, Kernel3,
    Shape,
};
use conv3_test_utils::{constant_grid, ramp_grid, reference_cell, seeded_grid};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn all_ones_grid_all_ones_kernel() {
    init_logging();
    let grid = constant_grid(5, 5, 1);
    let out = conv3::apply(&grid, &Kernel3::splat(1)).unwrap();
    assert_eq!(out.shape(), Shape::new(5, 5).unwrap());
    for i in 1..=3 {
        for j in 1..=3 {
            assert_eq!(out.get(i, j), Some(&9), "cell ({i}, {j})");
        }
    }
}

#[test]
fn ramp_with_scaled_identity() {
    init_logging();
    let grid = ramp_grid(4, 4);
    let out = conv3::apply(&grid, &Kernel3::scaled_identity(2)).unwrap();
    assert_eq!(out.get(1, 1), Some(&(2 * grid[(1, 1)])));
    for (i, j) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        assert_eq!(*out.get(i, j).unwrap(), 2 * grid[(i, j)]);
    }
}

#[test]
fn minimal_three_by_three_uses_whole_grid() {
    init_logging();
    let grid = Grid::from_rows(vec![vec![1, -2, 3], vec![-4, 5, -6], vec![7, -8, 9]]).unwrap();
    let kernel = Kernel3::new([[9, 8, 7], [6, 5, 4], [3, 2, 1]]);
    let out = conv3::apply(&grid, &kernel).unwrap();

    let mut expected = 0;
    for r in 0..3 {
        for c in 0..3 {
            expected += kernel.weights()[r][c] * grid[(r, c)];
        }
    }
    assert_eq!(out.get(1, 1), Some(&expected));
    assert_eq!(i64::from(expected), reference_cell(&grid, &kernel, 1, 1));
    assert_eq!(out.computed_cells().count(), 1);
}

#[test]
fn kernel_orientation_row_is_vertical() {
    // Only the weight for the neighbor above the center is set.
    let kernel = Kernel3::new([[0, 1, 0], [0, 0, 0], [0, 0, 0]]);
    let grid = ramp_grid(3, 3);
    let out = conv3::apply(&grid, &kernel).unwrap();
    assert_eq!(out.get(1, 1), Some(&grid[(0, 1)]));
}

#[test]
fn thin_grids_fail_before_computing() {
    for (rows, cols) in [(1, 8), (2, 8), (8, 1), (8, 2)] {
        let grid = constant_grid(rows, cols, 3);
        let err = conv3::apply(&grid, &Kernel3::identity()).unwrap_err();
        assert_eq!(err, GridError::InvalidDimensions { rows, cols });
        assert!(err.to_string().contains("invalid dimensions"));
    }
}

#[test]
fn zero_padding_on_border() {
    let grid = constant_grid(4, 5, 1);
    let out = ConvolutionKernelApplier::builder()
        .edge(EdgeBehavior::Zero)
        .build()
        .unwrap()
        .apply(&grid, &Kernel3::splat(1))
        .unwrap();
    assert_eq!(out.get(0, 0), Some(&4));
    assert_eq!(out.get(0, 2), Some(&6));
    assert_eq!(out.get(1, 0), Some(&6));
    assert_eq!(out.get(3, 4), Some(&4));
    assert_eq!(out.get(2, 2), Some(&9));
}

#[test]
fn clamp_replicates_edges() {
    let grid = ramp_grid(3, 3);
    let out = ConvolutionKernelApplier::builder()
        .edge(EdgeBehavior::Clamp)
        .build()
        .unwrap()
        .apply(&grid, &Kernel3::splat(1))
        .unwrap();
    // Window of (0,0) clamps to rows {0,0,1} x cols {0,0,1}.
    let expected = 4 * grid[(0, 0)] + 2 * grid[(0, 1)] + 2 * grid[(1, 0)] + grid[(1, 1)];
    assert_eq!(out.get(0, 0), Some(&expected));
}

#[test]
fn wrap_treats_grid_as_torus() {
    let grid = ramp_grid(3, 4);
    let out = ConvolutionKernelApplier::builder()
        .edge(EdgeBehavior::Wrap)
        .build()
        .unwrap()
        .apply(&grid, &Kernel3::splat(1))
        .unwrap();
    // On a 3-row torus every column triple covers all rows, so each cell
    // sums its own column and the two neighbours with wrap.
    let col_sum = |c: usize| (0..3).map(|r| grid[(r, c)]).sum::<i32>();
    assert_eq!(out.get(0, 0), Some(&(col_sum(3) + col_sum(0) + col_sum(1))));
    assert_eq!(out.get(2, 3), Some(&(col_sum(2) + col_sum(3) + col_sum(0))));
}

#[test]
fn checked_mode_names_first_overflowing_cell() {
    let mut grid = constant_grid(5, 5, 0);
    grid[(3, 3)] = i32::MIN;
    let applier = ConvolutionKernelApplier::builder()
        .accumulation(Accumulation::Checked)
        .build()
        .unwrap();
    let err = applier.apply(&grid, &Kernel3::splat(-1)).unwrap_err();
    assert_eq!(err, GridError::Overflow { row: 2, col: 2 });

    let widened = applier.apply_widened(&grid, &Kernel3::splat(-1)).unwrap();
    assert_eq!(widened.get(2, 2), Some(&(-i64::from(i32::MIN))));
}

#[test]
fn parallel_large_grid_matches_sequential() {
    init_logging();
    let grid = seeded_grid(97, 61, 10_000, 7);
    let kernel = Kernel3::new([[1, 2, 1], [2, 4, 2], [1, 2, 1]]);
    let seq = conv3::apply(&grid, &kernel).unwrap();
    let par = ConvolutionKernelApplier::builder()
        .execution(Execution::auto())
        .build()
        .unwrap()
        .apply(&grid, &kernel)
        .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn input_is_left_untouched() {
    let grid = seeded_grid(6, 6, 100, 3);
    let before = grid.clone();
    let _ = conv3::apply(&grid, &Kernel3::splat(3)).unwrap();
    assert_eq!(grid, before);
}
