//! Rectangular region selection.
//!
//! A crop computes the mask of cells whose coordinates fall inside the
//! window (inclusive bounds), then keeps the tight bounding box of rows and
//! columns that contain at least one masked cell. The crop is rectangular:
//! cells inside the box but outside the mask are kept as they are, not
//! nulled. On a regular lattice the two coincide.

use std::ops::Range;

use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// An inclusive coordinate interval in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl CoordRange {
    /// Full longitude extent, used when a window constrains latitude only.
    pub const ALL_LONGITUDES: Self = Self {
        min: -180.0,
        max: 180.0,
    };

    /// Full latitude extent, used when a window constrains longitude only.
    pub const ALL_LATITUDES: Self = Self {
        min: -90.0,
        max: 90.0,
    };

    /// Create a range.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRange`] if a bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> GridResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GridError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Check whether `value` lies in the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Optional longitude and latitude constraints for a regional export.
///
/// # Example
///
/// ```
/// use relief_grid::{CoordRange, CropWindow};
///
/// let window = CropWindow::new()
///     .with_lon(CoordRange::new(85.0, 110.0).unwrap())
///     .with_lat(CoordRange::new(15.0, 30.0).unwrap());
/// assert!(!window.is_unbounded());
/// assert!(CropWindow::default().is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropWindow {
    /// Longitude constraint.
    pub lon: Option<CoordRange>,
    /// Latitude constraint.
    pub lat: Option<CoordRange>,
}

impl CropWindow {
    /// A window with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lon: None,
            lat: None,
        }
    }

    /// Constrain longitude.
    #[must_use]
    pub const fn with_lon(mut self, range: CoordRange) -> Self {
        self.lon = Some(range);
        self
    }

    /// Constrain latitude.
    #[must_use]
    pub const fn with_lat(mut self, range: CoordRange) -> Self {
        self.lat = Some(range);
        self
    }

    /// `true` when neither axis is constrained.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.lon.is_none() && self.lat.is_none()
    }

    /// Longitude range, defaulting to the full geographic extent.
    #[must_use]
    pub fn lon_or_all(&self) -> CoordRange {
        self.lon.unwrap_or(CoordRange::ALL_LONGITUDES)
    }

    /// Latitude range, defaulting to the full geographic extent.
    #[must_use]
    pub fn lat_or_all(&self) -> CoordRange {
        self.lat.unwrap_or(CoordRange::ALL_LATITUDES)
    }
}

/// The result of a crop: three index-aligned grids and where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Cropped longitude grid.
    pub lon_grid: Grid<f64>,
    /// Cropped latitude grid.
    pub lat_grid: Grid<f64>,
    /// Cropped height grid.
    pub height_grid: Grid<f64>,
    /// Rows of the source grid covered by the crop.
    pub rows: Range<usize>,
    /// Columns of the source grid covered by the crop.
    pub cols: Range<usize>,
}

/// Crop three index-aligned grids to a coordinate window.
///
/// An unbounded window returns copies of the full grids. When only one axis
/// is constrained, the other spans the full geographic extent.
///
/// # Errors
///
/// - [`GridError::ShapeMismatch`] if the grids are not the same shape
/// - [`GridError::EmptyRegion`] if no cell falls inside the window
///
/// # Example
///
/// ```
/// use relief_grid::{crop, CoordRange, CropWindow, Grid};
///
/// let lon = Grid::from_fn(3, 3, |_, c| c as f64);
/// let lat = Grid::from_fn(3, 3, |r, _| 2.0 - r as f64);
/// let height = Grid::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
///
/// let window = CropWindow::new().with_lon(CoordRange::new(1.0, 2.0).unwrap());
/// let region = crop(&lon, &lat, &height, &window).unwrap();
/// assert_eq!(region.height_grid.shape(), (3, 2));
/// assert_eq!(region.cols, 1..3);
/// ```
pub fn crop(
    lon_grid: &Grid<f64>,
    lat_grid: &Grid<f64>,
    height_grid: &Grid<f64>,
    window: &CropWindow,
) -> GridResult<Region> {
    lon_grid.ensure_same_shape(lat_grid)?;
    lon_grid.ensure_same_shape(height_grid)?;

    let (rows, cols) = lon_grid.shape();
    if window.is_unbounded() {
        return Ok(Region {
            lon_grid: lon_grid.clone(),
            lat_grid: lat_grid.clone(),
            height_grid: height_grid.clone(),
            rows: 0..rows,
            cols: 0..cols,
        });
    }

    let lon_range = window.lon_or_all();
    let lat_range = window.lat_or_all();

    let mut row_hit = vec![false; rows];
    let mut col_hit = vec![false; cols];
    for ((r, c), &lon) in lon_grid.indexed_iter() {
        if lon_range.contains(lon) && lat_range.contains(lat_grid[(r, c)]) {
            row_hit[r] = true;
            col_hit[c] = true;
        }
    }

    let (Some(row_span), Some(col_span)) = (hit_span(&row_hit), hit_span(&col_hit)) else {
        return Err(GridError::EmptyRegion {
            lon_min: lon_range.min,
            lon_max: lon_range.max,
            lat_min: lat_range.min,
            lat_max: lat_range.max,
        });
    };

    debug!(
        rows = row_span.len(),
        cols = col_span.len(),
        row_start = row_span.start,
        col_start = col_span.start,
        "Cropped region"
    );

    Ok(Region {
        lon_grid: lon_grid.slice(row_span.clone(), col_span.clone()),
        lat_grid: lat_grid.slice(row_span.clone(), col_span.clone()),
        height_grid: height_grid.slice(row_span.clone(), col_span.clone()),
        rows: row_span,
        cols: col_span,
    })
}

/// First..=last index with a hit, as a half-open range.
fn hit_span(hits: &[bool]) -> Option<Range<usize>> {
    let first = hits.iter().position(|&h| h)?;
    let last = hits.iter().rposition(|&h| h)?;
    Some(first..last + 1)
}
