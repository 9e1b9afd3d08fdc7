//! Box-blur smoothing.

use relief_grid::Grid;

/// Apply `passes` rounds of a 3x3 box blur.
///
/// Neighbors outside the grid are clamped to the nearest edge cell, so a
/// corner averages itself four times. Each pass reads the full output of the
/// previous pass. NaN cells stay NaN and are left out of their neighbors'
/// averages.
///
/// # Example
///
/// ```
/// use relief_field::box_blur;
/// use relief_grid::Grid;
///
/// let grid = Grid::from_fn(3, 3, |r, c| if (r, c) == (1, 1) { 9.0 } else { 0.0 });
/// let blurred = box_blur(&grid, 1);
/// assert_eq!(blurred[(1, 1)], 1.0);
/// ```
#[must_use]
pub fn box_blur(grid: &Grid<f64>, passes: u32) -> Grid<f64> {
    let mut current = grid.clone();
    for _ in 0..passes {
        current = blur_once(&current);
    }
    current
}

fn blur_once(grid: &Grid<f64>) -> Grid<f64> {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return grid.clone();
    }

    Grid::from_fn(rows, cols, |r, c| {
        let center = grid[(r, c)];
        if center.is_nan() {
            return center;
        }

        let mut sum = 0.0;
        let mut count = 0_u32;
        for nr in clamped_window(r, rows) {
            for nc in clamped_window(c, cols) {
                let v = grid[(nr, nc)];
                if !v.is_nan() {
                    sum += v;
                    count += 1;
                }
            }
        }
        sum / f64::from(count)
    })
}

/// Indices `i - 1, i, i + 1`, each clamped into `0..len`.
fn clamped_window(i: usize, len: usize) -> [usize; 3] {
    [i.saturating_sub(1), i, (i + 1).min(len - 1)]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_passes_is_identity() {
        let grid = Grid::from_fn(3, 4, |r, c| (r * 4 + c) as f64);
        assert_eq!(box_blur(&grid, 0), grid);
    }

    #[test]
    fn constant_field_is_fixed_point() {
        let grid = Grid::filled(4, 5, 0.25);
        let blurred = box_blur(&grid, 3);
        for &v in blurred.iter() {
            assert_relative_eq!(v, 0.25);
        }
    }

    #[test]
    fn corner_uses_clamped_neighbors() {
        // Corner (0,0) window is rows {0,0,1} x cols {0,0,1}:
        // (0,0) x4, (0,1) x2, (1,0) x2, (1,1) x1.
        let grid = Grid::from_vec(2, 2, vec![9.0, 0.0, 0.0, 0.0]).unwrap();
        let blurred = box_blur(&grid, 1);
        assert_relative_eq!(blurred[(0, 0)], 4.0);
        assert_relative_eq!(blurred[(1, 1)], 1.0);
    }

    #[test]
    fn passes_compound() {
        let grid = Grid::from_fn(5, 5, |r, c| if (r, c) == (2, 2) { 81.0 } else { 0.0 });
        let once = box_blur(&grid, 1);
        let twice = box_blur(&grid, 2);
        assert_eq!(box_blur(&once, 1), twice);
        assert_relative_eq!(once[(2, 2)], 9.0);
        // The 3x3 block of 9s fully covers the center's window.
        assert_relative_eq!(twice[(2, 2)], 9.0);
        assert_relative_eq!(twice[(0, 0)], 1.0);
    }

    #[test]
    fn nan_cells_are_preserved_and_skipped() {
        let grid = Grid::from_vec(1, 3, vec![f64::NAN, 3.0, 6.0]).unwrap();
        let blurred = box_blur(&grid, 1);
        assert!(blurred[(0, 0)].is_nan());
        // (0,1): neighbors NaN, 3, 6 per row (x3 rows clamped) -> mean of finite = 4.5
        assert_relative_eq!(blurred[(0, 1)], 4.5);
        // (0,2): neighbors 3, 6, 6 -> 5.0
        assert_relative_eq!(blurred[(0, 2)], 5.0);
    }

    #[test]
    fn blur_stays_within_input_range() {
        let grid = Grid::from_fn(6, 7, |r, c| ((r * 7 + c) % 5) as f64 / 4.0);
        let blurred = box_blur(&grid, 4);
        for &v in blurred.iter() {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
