//! Field statistics.

use std::fmt;

use relief_grid::Grid;

/// Percentile of the finite values, by linear interpolation between the
/// two closest ranks.
///
/// `p` is in percent. Returns `None` if there are no finite values.
///
/// # Example
///
/// ```
/// use relief_field::percentile;
///
/// assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 50.0), Some(2.5));
/// assert_eq!(percentile(&[4.0, f64::NAN, 1.0], 100.0), Some(4.0));
/// ```
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    // Rank is clamped to [0, len - 1] before truncating back to an index.
    let (lo, hi, frac) = {
        let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        (lo, hi, rank - rank.floor())
    };

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Summary of a scalar grid: finite range and missing-cell count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    /// Number of finite cells.
    pub finite_count: usize,
    /// Number of NaN cells.
    pub missing_count: usize,
    /// Smallest finite value, if any.
    pub min: Option<f64>,
    /// Largest finite value, if any.
    pub max: Option<f64>,
}

impl FieldSummary {
    /// Summarize a grid.
    #[must_use]
    pub fn of(grid: &Grid<f64>) -> Self {
        let range = grid.finite_range();
        Self {
            finite_count: grid.iter().filter(|v| v.is_finite()).count(),
            missing_count: grid.nan_count(),
            min: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
        }
    }
}

impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(
                f,
                "{min:.2} to {max:.2} ({} cells, {} missing)",
                self.finite_count, self.missing_count
            ),
            _ => write!(f, "no finite values ({} missing)", self.missing_count),
        }
    }
}
