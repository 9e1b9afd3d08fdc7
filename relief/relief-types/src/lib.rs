//! Core mesh types for printable relief models.
//!
//! This crate provides the foundational types shared by the relief pipeline:
//!
//! - [`Vertex`] - A point in 3D space, in millimeters
//! - [`ReliefMesh`] - A triangle mesh whose faces use **1-based** vertex indices
//! - [`Aabb`] - Axis-aligned bounding box, used for model size reporting
//!
//! # Indexing
//!
//! Faces reference vertices with 1-based indices, matching the Wavefront OBJ
//! convention the meshes are serialized to. Index `1` is the first vertex.
//! Use [`ReliefMesh::vertex`] to resolve an index.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: east (longitude)
//! - Y: north (latitude)
//! - Z: height above the print bed
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use relief_types::{ReliefMesh, Vertex};
//!
//! let mut mesh = ReliefMesh::new();
//! let a = mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0)).unwrap();
//! let b = mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0)).unwrap();
//! let c = mesh.push_vertex(Vertex::from_coords(0.0, 1.0, 0.0)).unwrap();
//! mesh.faces.push([a, b, c]);
//!
//! assert_eq!(a, 1);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod mesh;
mod vertex;

pub use bounds::Aabb;
pub use mesh::ReliefMesh;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
