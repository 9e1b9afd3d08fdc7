//! Dense row-major 2D grid.

use std::ops::{Index, Range};

use crate::error::{GridError, GridResult};

/// A dense, row-major 2D grid.
///
/// Cell `(row, col)` lives at `data[row * cols + col]`. Grids in this crate
/// are immutable snapshots: every operation that changes shape or content
/// returns a new grid.
///
/// # Example
///
/// ```
/// use relief_grid::Grid;
///
/// let grid = Grid::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid[(1, 0)], 4.0);
/// assert_eq!(grid.row(0), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap row-major data in a grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DataLength`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> GridResult<Self> {
        let expected = rows.saturating_mul(cols);
        if data.len() != expected {
            return Err(GridError::DataLength {
                rows,
                cols,
                expected,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the grid has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat offset of `(row, col)`. Does not bounds-check.
    #[inline]
    #[must_use]
    pub const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(self.offset(row, col))
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Row-major view of every cell.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid, returning its row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over `((row, col), &cell)` in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Check that `other` has the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] when the shapes differ.
    pub fn ensure_same_shape<U>(&self, other: &Grid<U>) -> GridResult<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: other.rows,
                cols: other.cols,
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Copy the rectangular block `rows x cols` into a new grid.
    ///
    /// Ranges are clamped to the grid's extent.
    #[must_use]
    pub fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let row_end = rows.end.min(self.rows);
        let col_end = cols.end.min(self.cols);
        let row_start = rows.start.min(row_end);
        let col_start = cols.start.min(col_end);

        let mut data = Vec::with_capacity((row_end - row_start) * (col_end - col_start));
        for row in row_start..row_end {
            let base = self.offset(row, 0);
            data.extend_from_slice(&self.data[base + col_start..base + col_end]);
        }

        Self {
            rows: row_end - row_start,
            cols: col_end - col_start,
            data,
        }
    }
}

impl Grid<f64> {
    /// Smallest and largest finite cell values, ignoring NaN.
    ///
    /// Returns `None` when no cell is finite.
    #[must_use]
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of NaN cells.
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn sample() -> Grid<f64> {
        Grid::from_fn(3, 4, |r, c| (r * 10 + c) as f64)
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            GridError::DataLength {
                rows: 2,
                cols: 2,
                expected: 4,
                len: 3
            }
        );
    }

    #[test]
    fn indexing_is_row_major() {
        let grid = sample();
        assert_eq!(grid[(0, 0)], 0.0);
        assert_eq!(grid[(2, 3)], 23.0);
        assert_eq!(grid.as_slice()[grid.offset(1, 2)], 12.0);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn indexed_iter_reports_positions() {
        let grid = sample();
        let last = grid.indexed_iter().last().unwrap();
        assert_eq!(last, ((2, 3), &23.0));
    }

    #[test]
    fn slice_copies_block() {
        let grid = sample();
        let block = grid.slice(1..3, 1..3);
        assert_eq!(block.shape(), (2, 2));
        assert_eq!(block.as_slice(), &[11.0, 12.0, 21.0, 22.0]);
    }

    #[test]
    fn slice_clamps_ranges() {
        let grid = sample();
        let block = grid.slice(2..9, 3..9);
        assert_eq!(block.shape(), (1, 1));
        assert_eq!(block[(0, 0)], 23.0);
    }

    #[test]
    fn finite_range_skips_nan() {
        let grid = Grid::from_vec(1, 4, vec![f64::NAN, 3.0, -1.0, 2.0]).unwrap();
        assert_eq!(grid.finite_range(), Some((-1.0, 3.0)));
        assert_eq!(grid.nan_count(), 1);

        let empty = Grid::filled(2, 2, f64::NAN);
        assert_eq!(empty.finite_range(), None);
    }

    #[test]
    fn shape_check() {
        let a = sample();
        let b = Grid::filled(3, 4, 0_u8);
        let c = Grid::filled(4, 3, 0_u8);
        assert!(a.ensure_same_shape(&b).is_ok());
        assert!(matches!(
            a.ensure_same_shape(&c),
            Err(GridError::ShapeMismatch { rows: 4, cols: 3, .. })
        ));
    }

    #[test]
    fn map_keeps_shape() {
        let grid = sample().map(|v| v * 2.0);
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid[(1, 1)], 22.0);
    }
}
