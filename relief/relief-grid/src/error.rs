//! Error types for grid operations.

use thiserror::Error;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while reconstructing or cropping grids.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    /// No samples were supplied.
    #[error("no samples to reconstruct a grid from")]
    EmptyInput,

    /// A sample coordinate is NaN or infinite.
    #[error("sample {index} has a non-finite coordinate (lat {latitude}, lon {longitude})")]
    NonFiniteCoordinate {
        /// Position of the sample in the input.
        index: usize,
        /// Latitude of the sample.
        latitude: f64,
        /// Longitude of the sample.
        longitude: f64,
    },

    /// The sample count does not match the distinct latitude × longitude lattice.
    #[error(
        "incomplete lattice: {rows} latitudes x {cols} longitudes needs {expected} samples, got {actual}"
    )]
    LatticeIncomplete {
        /// Number of distinct latitudes.
        rows: usize,
        /// Number of distinct longitudes.
        cols: usize,
        /// Samples required for a complete lattice.
        expected: usize,
        /// Samples supplied.
        actual: usize,
    },

    /// A lattice point has no sample.
    #[error("incomplete lattice: no sample at lat {latitude}, lon {longitude}")]
    MissingSample {
        /// Latitude of the missing point.
        latitude: f64,
        /// Longitude of the missing point.
        longitude: f64,
    },

    /// Two samples share the same lattice point.
    #[error("incomplete lattice: duplicate sample at lat {latitude}, lon {longitude}")]
    DuplicateSample {
        /// Latitude of the duplicated point.
        latitude: f64,
        /// Longitude of the duplicated point.
        longitude: f64,
    },

    /// Grids that must be index-aligned have different shapes.
    #[error("grid shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        /// Expected number of rows.
        expected_rows: usize,
        /// Expected number of columns.
        expected_cols: usize,
        /// Actual number of rows.
        rows: usize,
        /// Actual number of columns.
        cols: usize,
    },

    /// Row-major data does not fill `rows * cols` cells.
    #[error("grid data has {len} cells, shape {rows}x{cols} needs {expected}")]
    DataLength {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
        /// Cells required by the shape.
        expected: usize,
        /// Cells supplied.
        len: usize,
    },

    /// A crop window matched no cells.
    #[error("empty region: no cells with lon in [{lon_min}, {lon_max}] and lat in [{lat_min}, {lat_max}]")]
    EmptyRegion {
        /// Lower longitude bound.
        lon_min: f64,
        /// Upper longitude bound.
        lon_max: f64,
        /// Lower latitude bound.
        lat_min: f64,
        /// Upper latitude bound.
        lat_max: f64,
    },

    /// A coordinate range has `min > max` or a non-finite bound.
    #[error("invalid coordinate range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl GridError {
    /// Returns `true` for the lattice-completeness family of errors.
    #[must_use]
    pub const fn is_lattice_error(&self) -> bool {
        matches!(
            self,
            Self::LatticeIncomplete { .. } | Self::MissingSample { .. } | Self::DuplicateSample { .. }
        )
    }
}
