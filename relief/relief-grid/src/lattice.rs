//! Dense lattice reconstruction from unordered samples.
//!
//! Samples must form a complete rectangular lattice: every distinct latitude
//! paired with every distinct longitude exactly once. The reconstruction
//! validates this up front instead of reshaping mismatched data.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::sample::Sample;

/// A reconstructed lattice: three index-aligned grids plus the sorted axes.
///
/// Rows run north to south (latitude descending), columns west to east
/// (longitude ascending). `value_grid[(0, 0)]` is the sample with the largest
/// latitude and smallest longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    /// Longitude of every cell (`lon_grid[(r, c)] == longitudes[c]`).
    pub lon_grid: Grid<f64>,
    /// Latitude of every cell (`lat_grid[(r, c)] == latitudes[r]`).
    pub lat_grid: Grid<f64>,
    /// Sample value of every cell.
    pub value_grid: Grid<f64>,
    /// Distinct longitudes, ascending.
    pub longitudes: Vec<f64>,
    /// Distinct latitudes, descending.
    pub latitudes: Vec<f64>,
}

impl Lattice {
    /// Reconstruct a lattice from unordered samples.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyInput`] for an empty sample set
    /// - [`GridError::NonFiniteCoordinate`] if any coordinate is NaN or infinite
    /// - [`GridError::LatticeIncomplete`] if the sample count is not `rows * cols`
    /// - [`GridError::DuplicateSample`] / [`GridError::MissingSample`] if the
    ///   count matches but some lattice point is repeated or absent
    ///
    /// # Example
    ///
    /// ```
    /// use relief_grid::{Lattice, Sample};
    ///
    /// let samples = [
    ///     Sample::new(0.0, 10.0, 3.0),
    ///     Sample::new(1.0, 11.0, 2.0),
    ///     Sample::new(0.0, 11.0, 4.0),
    ///     Sample::new(1.0, 10.0, 1.0),
    /// ];
    /// let lattice = Lattice::reconstruct(&samples).unwrap();
    ///
    /// assert_eq!(lattice.shape(), (2, 2));
    /// assert_eq!(lattice.value_grid.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn reconstruct(samples: &[Sample]) -> GridResult<Self> {
        if samples.is_empty() {
            return Err(GridError::EmptyInput);
        }

        // `+ 0.0` folds -0.0 into 0.0 so both land on the same lattice line.
        let mut points = Vec::with_capacity(samples.len());
        for (index, s) in samples.iter().enumerate() {
            if !s.has_finite_coords() {
                return Err(GridError::NonFiniteCoordinate {
                    index,
                    latitude: s.latitude,
                    longitude: s.longitude,
                });
            }
            points.push(Sample::new(s.latitude + 0.0, s.longitude + 0.0, s.value));
        }

        let latitudes = distinct(points.iter().map(|s| s.latitude), Ordering::reverse);
        let longitudes = distinct(points.iter().map(|s| s.longitude), |o| o);
        let rows = latitudes.len();
        let cols = longitudes.len();
        let expected = rows * cols;

        if points.len() != expected {
            return Err(GridError::LatticeIncomplete {
                rows,
                cols,
                expected,
                actual: points.len(),
            });
        }

        points.sort_by(|a, b| {
            b.latitude
                .total_cmp(&a.latitude)
                .then(a.longitude.total_cmp(&b.longitude))
        });

        let mut values = Vec::with_capacity(expected);
        for (k, s) in points.iter().enumerate() {
            let latitude = latitudes[k / cols];
            let longitude = longitudes[k % cols];
            if s.latitude != latitude || s.longitude != longitude {
                let previous = k.checked_sub(1).map(|p| &points[p]);
                return Err(match previous {
                    Some(p) if p.latitude == s.latitude && p.longitude == s.longitude => {
                        GridError::DuplicateSample {
                            latitude: s.latitude,
                            longitude: s.longitude,
                        }
                    }
                    _ => GridError::MissingSample {
                        latitude,
                        longitude,
                    },
                });
            }
            values.push(s.value);
        }

        debug!(
            rows,
            cols,
            samples = samples.len(),
            "Reconstructed lattice"
        );

        let value_grid = Grid::from_vec(rows, cols, values)?;
        let lon_grid = Grid::from_fn(rows, cols, |_, c| longitudes[c]);
        let lat_grid = Grid::from_fn(rows, cols, |r, _| latitudes[r]);

        Ok(Self {
            lon_grid,
            lat_grid,
            value_grid,
            longitudes,
            latitudes,
        })
    }

    /// `(rows, cols)` of the lattice.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.value_grid.shape()
    }

    /// Number of distinct latitudes.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.value_grid.rows()
    }

    /// Number of distinct longitudes.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.value_grid.cols()
    }
}

/// Sorted distinct values; `order` adapts the ascending comparison.
fn distinct(values: impl Iterator<Item = f64>, order: impl Fn(Ordering) -> Ordering) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(|a, b| order(a.total_cmp(b)));
    out.dedup();
    out
}

/// Reconstruct a lattice from unordered samples.
///
/// Convenience wrapper around [`Lattice::reconstruct`].
///
/// # Errors
///
/// See [`Lattice::reconstruct`].
pub fn reconstruct_lattice(samples: &[Sample]) -> GridResult<Lattice> {
    Lattice::reconstruct(samples)
}
