//! Watertight relief solids from height grids.
//!
//! Turns a height grid with its longitude and latitude grids into a closed
//! triangle mesh ready for 3D printing:
//!
//! - Top surface: one vertex per finite cell, two triangles per complete quad
//! - Base plate: the same quads at `z = 0` with reversed winding
//! - Side walls: joining the top surface to the base plate
//!
//! Cells without a finite height are holes. The default
//! [`WallMode::Perimeter`] walls only the four grid edges, so holes inside
//! the grid stay open; [`WallMode::Boundary`] walls every boundary loop.
//!
//! # Example
//!
//! ```
//! use relief_build::{build_relief, validate_relief, EdgeAdjacency, MeshParams};
//! use relief_grid::Grid;
//!
//! let lon = Grid::from_fn(4, 5, |_, c| c as f64 * 0.5);
//! let lat = Grid::from_fn(4, 5, |r, _| 40.0 - r as f64 * 0.5);
//! let height = Grid::from_fn(4, 5, |r, c| 2.0 + (r * c) as f64);
//!
//! let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();
//!
//! let adjacency = EdgeAdjacency::build(&built.mesh.faces);
//! assert!(adjacency.is_closed_manifold());
//! assert!(validate_relief(&built.mesh).is_printable());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adjacency;
mod builder;
mod error;
mod index_map;
mod params;
mod validate;
mod walls;

pub use adjacency::{EdgeAdjacency, directed_boundary_edges};
pub use builder::{BuildStats, ReliefBuild, ReliefBuilder, build_relief};
pub use error::{BuildError, BuildResult};
pub use index_map::VertexIndexMap;
pub use params::{MeshParams, WallMode};
pub use validate::{MeshReport, validate_relief};
pub use walls::{GridEdge, perimeter_walls, rim_walls};
