//! File I/O for relief meshes.
//!
//! - [`save_obj_with_material`] - OBJ plus companion MTL, names differing only by extension
//! - [`write_obj`] / [`save_obj`] - OBJ text with a size header and count comments
//! - [`write_mtl`] / [`save_mtl`] - single-material MTL
//! - [`load_samples`] / [`read_samples`] - headerless potential CSV input
//!
//! Writers are buffered and flushed before returning; files are closed on
//! every exit path when the writer drops.
//!
//! # Example
//!
//! ```no_run
//! use relief_io::{load_samples, save_obj_with_material, ObjOptions, SurfaceMaterial};
//! use relief_types::ReliefMesh;
//!
//! let samples = load_samples("potential.csv").unwrap();
//! println!("{} samples", samples.len());
//!
//! let mesh = ReliefMesh::new();
//! save_obj_with_material(&mesh, "out/world.obj", &ObjOptions::default(), &SurfaceMaterial::default())
//!     .unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod mtl;
mod obj;
mod records;

pub use error::{IoError, IoResult};
pub use mtl::{SurfaceMaterial, save_mtl, write_mtl};
pub use obj::{ObjOptions, ObjOutput, save_obj, save_obj_with_material, write_obj};
pub use records::{PotentialRecord, load_samples, read_records, read_samples};
