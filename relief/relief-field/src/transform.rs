//! Raw field to printable height transformation.
//!
//! The pipeline runs in a fixed order; reordering any step changes the result:
//!
//! 1. Log compression: `log10(v + 1)`
//! 2. Min-max normalization to `[0, 1]` over finite values
//! 3. Optional 3x3 box-blur smoothing
//! 4. Linear scaling: `base_thickness + n * height_scale`
//! 5. Cap at `max_height`
//! 6. Spike damping above a percentile threshold
//!
//! NaN cells pass through every step unchanged.

use relief_grid::Grid;
use tracing::debug;

use crate::error::{FieldError, FieldResult};
use crate::params::FieldParams;
use crate::smooth::box_blur;
use crate::stats::percentile;

/// Transform a raw value grid into a height grid in millimeters.
///
/// Finite outputs always lie in `[base_thickness, max_height]`. With
/// `smooth_passes == 0` the mapping is monotonic in the raw value.
///
/// # Errors
///
/// - [`FieldError::InvalidParams`] if `params` fail [`FieldParams::validate`]
/// - [`FieldError::Domain`] if a raw value has `value + 1 <= 0` or is infinite
/// - [`FieldError::EmptyField`] if no cell is finite
/// - [`FieldError::DegenerateRange`] if all finite values are equal
///
/// # Example
///
/// ```
/// use relief_field::{transform_field, FieldParams};
/// use relief_grid::Grid;
///
/// let values = Grid::from_vec(1, 3, vec![0.0, 9.0, 99.0]).unwrap();
/// let params = FieldParams::raw().with_spike_damping(100.0, 1.0);
/// let heights = transform_field(&values, &params).unwrap();
///
/// assert_eq!(heights[(0, 0)], 2.0);
/// assert_eq!(heights[(0, 1)], 27.0);
/// assert_eq!(heights[(0, 2)], 52.0);
/// ```
pub fn transform_field(values: &Grid<f64>, params: &FieldParams) -> FieldResult<Grid<f64>> {
    params.validate()?;

    let compressed = log_compress(values)?;
    let mut normalized = normalize(&compressed)?;

    if params.smooth_passes > 0 {
        debug!(passes = params.smooth_passes, "Applying smoothing passes");
        normalized = box_blur(&normalized, params.smooth_passes);
    }

    let heights = normalized.map(|&n| {
        let h = params.base_thickness + n * params.height_scale;
        h.min(params.max_height)
    });

    let heights = damp_spikes(&heights, params.spike_percentile, params.spike_damping);

    if let Some((lo, hi)) = heights.finite_range() {
        debug!(min = lo, max = hi, "Height range (mm)");
    }

    Ok(heights)
}

/// `log10(v + 1)` for every cell.
///
/// # Errors
///
/// Returns [`FieldError::Domain`] for the first cell (row-major) whose value
/// is infinite or has `value + 1 <= 0`.
pub fn log_compress(values: &Grid<f64>) -> FieldResult<Grid<f64>> {
    for ((row, col), &value) in values.indexed_iter() {
        if value.is_nan() {
            continue;
        }
        if value.is_infinite() || value + 1.0 <= 0.0 {
            return Err(FieldError::Domain { row, col, value });
        }
    }
    Ok(values.map(|&v| (v + 1.0).log10()))
}

/// Min-max normalize finite values into `[0, 1]`.
///
/// # Errors
///
/// - [`FieldError::EmptyField`] if no cell is finite
/// - [`FieldError::DegenerateRange`] if min equals max
pub fn normalize(values: &Grid<f64>) -> FieldResult<Grid<f64>> {
    let (lo, hi) = values.finite_range().ok_or(FieldError::EmptyField)?;
    let span = hi - lo;
    if span <= 0.0 {
        return Err(FieldError::DegenerateRange { value: lo });
    }
    Ok(values.map(|&v| ((v - lo) / span).clamp(0.0, 1.0)))
}

/// Pull heights above the `percentile` threshold toward it.
///
/// Every finite height strictly above the threshold becomes
/// `max(height * damping, threshold)`. Order among damped peaks is kept and
/// no height drops below the threshold.
#[must_use]
pub fn damp_spikes(heights: &Grid<f64>, percentile_rank: f64, damping: f64) -> Grid<f64> {
    let Some(threshold) = percentile(heights.as_slice(), percentile_rank) else {
        return heights.clone();
    };

    let mut damped = 0_usize;
    let out = heights.map(|&h| {
        if h > threshold {
            damped += 1;
            (h * damping).max(threshold)
        } else {
            h
        }
    });
    debug!(threshold, damped, "Damped spikes");
    out
}
