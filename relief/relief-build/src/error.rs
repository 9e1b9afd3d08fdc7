//! Error types for mesh building.

use relief_grid::GridError;
use thiserror::Error;

/// Result type for mesh building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building a relief mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The grid needs at least two rows and two columns to form a surface.
    #[error("grid {rows}x{cols} is too small: need at least 2x2 to form a surface")]
    GridTooSmall {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The horizontal scale is zero, negative, or not finite.
    #[error("xy_scale must be finite and positive, got {value}")]
    InvalidScale {
        /// The rejected scale.
        value: f64,
    },

    /// A longitude or latitude cell is not finite.
    #[error("non-finite coordinate at ({row}, {col})")]
    NonFiniteCoordinate {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },

    /// The mesh would need more vertices than `u32` indices can address.
    #[error("mesh needs {vertices} vertices, more than u32 indices can address")]
    IndexOverflow {
        /// Vertices required.
        vertices: usize,
    },

    /// The coordinate and height grids are not index-aligned.
    #[error(transparent)]
    Grid(#[from] GridError),
}
