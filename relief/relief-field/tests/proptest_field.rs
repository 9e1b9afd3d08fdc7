//! Property-based tests for the height transformation.
//!
//! Run with: cargo test -p relief-field -- proptest

use relief_field::{FieldParams, transform_field};
use relief_grid::Grid;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A small grid of non-negative raw values with at least two distinct entries.
fn arb_values() -> impl Strategy<Value = Grid<f64>> {
    (2_usize..8, 2_usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0.0..1.0e6f64, rows * cols).prop_filter_map(
            "needs a non-degenerate range",
            move |mut data| {
                // Pin two cells so the normalized range is never empty.
                data[0] = 0.0;
                data[1] = 1.0e6;
                Grid::from_vec(rows, cols, data).ok()
            },
        )
    })
}

fn arb_params() -> impl Strategy<Value = FieldParams> {
    (0.0..5.0f64, 0.0..100.0f64, 0.0..200.0f64, 0_u32..5, 50.0..100.0f64, 0.5..=1.0f64).prop_map(
        |(base, scale, extra, passes, pct, damping)| FieldParams {
            base_thickness: base,
            height_scale: scale,
            max_height: base + extra,
            smooth_passes: passes,
            spike_percentile: pct,
            spike_damping: damping,
        },
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_heights_are_bounded(values in arb_values(), params in arb_params()) {
        let heights = transform_field(&values, &params).unwrap();
        for &h in heights.iter() {
            prop_assert!(h >= params.base_thickness - 1e-9, "{h} below base");
            prop_assert!(h <= params.max_height + 1e-9, "{h} above cap");
        }
    }

    #[test]
    fn proptest_unsmoothed_is_monotonic(values in arb_values(), params in arb_params()) {
        let params = params.with_smooth_passes(0);
        let heights = transform_field(&values, &params).unwrap();
        let raw = values.as_slice();
        let out = heights.as_slice();
        for i in 0..raw.len() {
            for j in 0..raw.len() {
                if raw[i] <= raw[j] {
                    prop_assert!(out[i] <= out[j] + 1e-9);
                }
            }
        }
    }

    #[test]
    fn proptest_unsmoothed_is_repeatable(values in arb_values(), params in arb_params()) {
        let params = params.with_smooth_passes(0);
        let first = transform_field(&values, &params).unwrap();
        let second = transform_field(&values, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn proptest_shape_is_preserved(values in arb_values()) {
        let heights = transform_field(&values, &FieldParams::default()).unwrap();
        prop_assert_eq!(heights.shape(), values.shape());
    }
}
