//! Printable relief solids from gridded geographic fields.
//!
//! This umbrella crate re-exports the relief-* crates and adds the regional
//! export pipeline.
//!
//! # Quick Start
//!
//! ```no_run
//! use relief::prelude::*;
//! use std::path::Path;
//!
//! let samples = relief::io::load_samples("potential.csv").unwrap();
//! let (lattice, heights) = prepare_heights(&samples, &FieldParams::default()).unwrap();
//!
//! let summaries = export_regions(
//!     &lattice,
//!     &heights,
//!     &default_regions(),
//!     Path::new("models"),
//!     &ExportOptions::default(),
//! )
//! .unwrap();
//!
//! for summary in &summaries {
//!     println!("{summary}");
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - `ReliefMesh`, `Vertex`, `Aabb`
//! - [`grid`] - `Grid`, lattice reconstruction, region cropping
//! - [`field`] - Raw value to height transformation
//! - [`build`] - Closed-solid mesh building and validation
//! - [`io`] - OBJ/MTL output and potential CSV input

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `ReliefMesh`, `Vertex`, `Aabb`.
pub use relief_types as types;

/// Grids, lattice reconstruction and cropping.
pub use relief_grid as grid;

/// Height field transformation.
pub use relief_field as field;

/// Closed-solid mesh building.
pub use relief_build as build;

/// File I/O.
pub use relief_io as io;

mod error;
mod pipeline;

pub use error::{ReliefError, ReliefResult};
pub use pipeline::{
    ExportOptions, ExportSummary, RegionExport, default_regions, export_region, export_regions,
    prepare_heights,
};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for relief processing.
///
/// ```
/// use relief::prelude::*;
/// ```
pub mod prelude {
    pub use relief_types::{Aabb, ReliefMesh, Vertex};

    pub use relief_grid::{CoordRange, CropWindow, Grid, Lattice, Sample, crop};

    pub use relief_field::{FieldParams, transform_field};

    pub use relief_build::{
        MeshParams, MeshReport, ReliefBuilder, WallMode, build_relief, validate_relief,
    };

    pub use relief_io::{ObjOptions, SurfaceMaterial, load_samples, save_obj_with_material};

    pub use crate::{
        ExportOptions, ExportSummary, RegionExport, ReliefError, ReliefResult, default_regions,
        export_region, export_regions, prepare_heights,
    };
}
