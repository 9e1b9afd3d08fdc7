//! Print-safe height fields.
//!
//! Converts raw scalar grids (population potential, elevation, density)
//! into bounded heights in millimeters:
//!
//! - [`transform_field`] - The full log / normalize / smooth / scale / cap / damp pipeline
//! - [`FieldParams`] - Pipeline parameters with presets
//! - [`box_blur`] - Edge-clamped 3x3 box blur
//! - [`percentile`] - Linear-interpolation percentile over finite values
//! - [`FieldSummary`] - Finite range and missing-cell count of a grid
//!
//! # Example
//!
//! ```
//! use relief_field::{transform_field, FieldParams};
//! use relief_grid::Grid;
//!
//! let values = Grid::from_fn(4, 4, |r, c| (r * 4 + c) as f64 * 100.0);
//! let params = FieldParams::default();
//! let heights = transform_field(&values, &params).unwrap();
//!
//! for &h in heights.iter() {
//!     assert!(h >= params.base_thickness && h <= params.max_height);
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod params;
mod smooth;
mod stats;
mod transform;

pub use error::{FieldError, FieldResult};
pub use params::FieldParams;
pub use smooth::box_blur;
pub use stats::{FieldSummary, percentile};
pub use transform::{damp_spikes, log_compress, normalize, transform_field};
