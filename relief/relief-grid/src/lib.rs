//! Gridded geographic fields for relief models.
//!
//! This crate turns scattered `(latitude, longitude, value)` samples into
//! dense row-major grids and crops them to regional windows:
//!
//! - [`Grid`] - Dense row-major 2D grid
//! - [`Sample`] - One scalar sample at a geographic coordinate
//! - [`Lattice`] - Reconstructed longitude, latitude, and value grids
//! - [`crop`] - Bounding-box crop of index-aligned grids to a [`CropWindow`]
//!
//! # Grid Orientation
//!
//! Rows run north to south (latitude descending) and columns run west to
//! east (longitude ascending). `NaN` marks a cell with no data.
//!
//! # Example
//!
//! ```
//! use relief_grid::{crop, CoordRange, CropWindow, Lattice, Sample};
//!
//! let mut samples = Vec::new();
//! for lat in [0.0, 1.0, 2.0] {
//!     for lon in [10.0, 11.0, 12.0] {
//!         samples.push(Sample::new(lat, lon, lat * lon));
//!     }
//! }
//!
//! let lattice = Lattice::reconstruct(&samples).unwrap();
//! assert_eq!(lattice.shape(), (3, 3));
//!
//! let window = CropWindow::new().with_lat(CoordRange::new(1.0, 2.0).unwrap());
//! let region = crop(
//!     &lattice.lon_grid,
//!     &lattice.lat_grid,
//!     &lattice.value_grid,
//!     &window,
//! )
//! .unwrap();
//! assert_eq!(region.height_grid.shape(), (2, 3));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod grid;
mod lattice;
mod region;
mod sample;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use lattice::{Lattice, reconstruct_lattice};
pub use region::{CoordRange, CropWindow, Region, crop};
pub use sample::Sample;
