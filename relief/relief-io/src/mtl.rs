//! Wavefront MTL material output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IoResult;

/// A single Phong material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceMaterial {
    /// Material name, referenced by `usemtl`.
    pub name: String,
    /// Comment line written above the material.
    pub comment: String,
    /// Ambient color.
    pub ambient: [f64; 3],
    /// Diffuse color.
    pub diffuse: [f64; 3],
    /// Specular color.
    pub specular: [f64; 3],
    /// Specular exponent.
    pub shininess: f64,
}

impl Default for SurfaceMaterial {
    /// Matte sandstone.
    fn default() -> Self {
        Self {
            name: "surface".to_string(),
            comment: "Material for population surface".to_string(),
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.6, 0.4],
            specular: [0.1, 0.1, 0.1],
            shininess: 10.0,
        }
    }
}

/// Write a material description.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_mtl<W: Write>(material: &SurfaceMaterial, mut writer: W) -> IoResult<()> {
    let rgb = |c: &[f64; 3]| format!("{} {} {}", coefficient(c[0]), coefficient(c[1]), coefficient(c[2]));

    writeln!(writer, "# {}", material.comment)?;
    writeln!(writer, "newmtl {}", material.name)?;
    writeln!(writer, "Ka {}", rgb(&material.ambient))?;
    writeln!(writer, "Kd {}", rgb(&material.diffuse))?;
    writeln!(writer, "Ks {}", rgb(&material.specular))?;
    writeln!(writer, "Ns {}", coefficient(material.shininess))?;
    Ok(())
}

/// Shortest exact decimal, keeping one decimal place on whole numbers.
fn coefficient(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Save a material description to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_mtl<P: AsRef<Path>>(material: &SurfaceMaterial, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_mtl(material, &mut writer)?;
    writer.flush()?;
    Ok(())
}
