//! Wavefront OBJ output with a companion MTL file.
//!
//! Layout of a written file:
//!
//! ```text
//! # <title>
//! # <description>
//! # Size: X × Y × Z mm
//! mtllib <stem>.mtl
//! usemtl <material>
//!
//! v x y z            (6 decimals, one per vertex)
//!
//! # N vertices
//!
//! f i j k            (1-based, one per face)
//!
//! # M faces
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use relief_types::ReliefMesh;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::mtl::{SurfaceMaterial, save_mtl};

/// Header and material settings for OBJ output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjOptions {
    /// First header comment line.
    pub title: String,
    /// Second header comment line.
    pub description: String,
    /// Material name for `usemtl`.
    pub material_name: String,
}

impl Default for ObjOptions {
    fn default() -> Self {
        Self {
            title: "Gravitational Potential Surface".to_string(),
            description: "Generated from population clustering data".to_string(),
            material_name: "surface".to_string(),
        }
    }
}

impl ObjOptions {
    /// Set the title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Paths written by [`save_obj_with_material`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjOutput {
    /// The OBJ file.
    pub obj_path: PathBuf,
    /// The companion MTL file.
    pub mtl_path: PathBuf,
}

/// Write a mesh as OBJ text.
///
/// `mtllib` is the material library file name written on the `mtllib` line.
///
/// # Errors
///
/// - [`IoError::InvalidFace`] if a face references a missing vertex
/// - [`IoError::Io`] if writing fails
pub fn write_obj<W: Write>(
    mesh: &ReliefMesh,
    options: &ObjOptions,
    mtllib: &str,
    mut writer: W,
) -> IoResult<()> {
    if let Some((face, index)) = mesh.first_invalid_face() {
        return Err(IoError::InvalidFace {
            face,
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    let bounds = mesh.bounds();
    let (sx, sy, sz) = if bounds.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (bounds.max.x, bounds.max.y, bounds.max.z)
    };

    writeln!(writer, "# {}", options.title)?;
    writeln!(writer, "# {}", options.description)?;
    writeln!(writer, "# Size: {sx:.1} × {sy:.1} × {sz:.1} mm")?;
    writeln!(writer, "mtllib {mtllib}")?;
    writeln!(writer, "usemtl {}", options.material_name)?;
    writeln!(writer)?;

    for vertex in &mesh.vertices {
        let p = &vertex.position;
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    writeln!(writer)?;
    writeln!(writer, "# {} vertices", mesh.vertex_count())?;
    writeln!(writer)?;

    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "f {a} {b} {c}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "# {} faces", mesh.face_count())?;

    Ok(())
}

/// Save a mesh as an OBJ file referencing `<stem>.mtl`.
///
/// Only the OBJ file is written; see [`save_obj_with_material`] for the pair.
///
/// # Errors
///
/// - [`IoError::InvalidPath`] if the path has no file stem
/// - [`IoError::InvalidFace`] if a face references a missing vertex
/// - [`IoError::Io`] if the file cannot be created or written
pub fn save_obj<P: AsRef<Path>>(mesh: &ReliefMesh, path: P, options: &ObjOptions) -> IoResult<()> {
    let path = path.as_ref();
    let mtllib = mtl_file_name(path)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, options, &mtllib, &mut writer)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Saved OBJ"
    );
    Ok(())
}

/// Save a mesh as OBJ plus its MTL file next to it.
///
/// The two files differ only by extension. The material is written under
/// the name in `options`, so `usemtl` always resolves.
///
/// # Errors
///
/// See [`save_obj`].
///
/// # Example
///
/// ```no_run
/// use relief_io::{save_obj_with_material, ObjOptions, SurfaceMaterial};
/// use relief_types::ReliefMesh;
///
/// let mesh = ReliefMesh::new();
/// let out = save_obj_with_material(&mesh, "world.obj", &ObjOptions::default(), &SurfaceMaterial::default()).unwrap();
/// assert_eq!(out.mtl_path.to_str(), Some("world.mtl"));
/// ```
pub fn save_obj_with_material<P: AsRef<Path>>(
    mesh: &ReliefMesh,
    path: P,
    options: &ObjOptions,
    material: &SurfaceMaterial,
) -> IoResult<ObjOutput> {
    let obj_path = path.as_ref().to_path_buf();
    let mtl_path = obj_path.with_extension("mtl");

    save_obj(mesh, &obj_path, options)?;

    let material = SurfaceMaterial {
        name: options.material_name.clone(),
        ..material.clone()
    };
    save_mtl(&material, &mtl_path)?;

    Ok(ObjOutput { obj_path, mtl_path })
}

/// `<stem>.mtl` for an OBJ path.
fn mtl_file_name(path: &Path) -> IoResult<String> {
    path.file_stem()
        .map(|stem| format!("{}.mtl", stem.to_string_lossy()))
        .ok_or_else(|| IoError::InvalidPath {
            path: path.to_path_buf(),
        })
}
