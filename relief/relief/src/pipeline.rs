//! Samples to printable regional models.
//!
//! One global height grid feeds any number of regional exports. Each export
//! crops the grid, builds a solid, checks it, and writes `<name>.obj` and
//! `<name>.mtl` into an output directory.

use std::fmt;
use std::path::{Path, PathBuf};

use relief_build::{BuildError, MeshParams, MeshReport, WallMode, build_relief, validate_relief};
use relief_field::{FieldParams, FieldSummary, transform_field};
use relief_grid::{CoordRange, CropWindow, Grid, GridError, Lattice, Sample, crop};
use relief_io::{ObjOptions, SurfaceMaterial, save_obj_with_material};
use relief_types::Vector3;
use tracing::{debug, info, warn};

use crate::error::{ReliefError, ReliefResult};

/// A named regional model: crop window and horizontal scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionExport {
    /// File stem of the written model.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Coordinate window; unbounded exports the whole grid.
    pub window: CropWindow,
    /// Horizontal scale in millimeters per degree.
    pub xy_scale: f64,
}

impl RegionExport {
    /// A region covering the whole grid at 2 mm per degree.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            window: CropWindow::new(),
            xy_scale: MeshParams::default().xy_scale,
        }
    }

    /// Set the crop window.
    #[must_use]
    pub const fn with_window(mut self, window: CropWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the horizontal scale.
    #[must_use]
    pub const fn with_xy_scale(mut self, xy_scale: f64) -> Self {
        self.xy_scale = xy_scale;
        self
    }
}

const fn window(lon: (f64, f64), lat: (f64, f64)) -> CropWindow {
    CropWindow {
        lon: Some(CoordRange {
            min: lon.0,
            max: lon.1,
        }),
        lat: Some(CoordRange {
            min: lat.0,
            max: lat.1,
        }),
    }
}

/// The five standard regional models.
///
/// | Name | Longitude | Latitude | mm/° |
/// |------|-----------|----------|------|
/// | `world_full` | all | all | 1.5 |
/// | `western_hemisphere` | -180..-30 | -60..80 | 2.0 |
/// | `eastern_hemisphere` | -30..180 | -60..80 | 2.0 |
/// | `asia_pacific` | 60..150 | -10..60 | 3.0 |
/// | `golden_triangle` | 85..110 | 15..30 | 5.0 |
#[must_use]
pub fn default_regions() -> Vec<RegionExport> {
    vec![
        RegionExport::new("world_full", "Complete world view").with_xy_scale(1.5),
        RegionExport::new("western_hemisphere", "Americas")
            .with_window(window((-180.0, -30.0), (-60.0, 80.0)))
            .with_xy_scale(2.0),
        RegionExport::new("eastern_hemisphere", "Europe, Africa, Asia")
            .with_window(window((-30.0, 180.0), (-60.0, 80.0)))
            .with_xy_scale(2.0),
        RegionExport::new("asia_pacific", "Asia-Pacific detail")
            .with_window(window((60.0, 150.0), (-10.0, 60.0)))
            .with_xy_scale(3.0),
        RegionExport::new("golden_triangle", "Southeast Asia high detail")
            .with_window(window((85.0, 110.0), (15.0, 30.0)))
            .with_xy_scale(5.0),
    ]
}

/// Settings shared by every export in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Add a base plate and side walls.
    pub add_base: bool,
    /// Side-wall strategy.
    pub walls: WallMode,
    /// OBJ header lines and material name.
    pub obj: ObjOptions,
    /// Material written to the MTL file.
    pub material: SurfaceMaterial,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            add_base: true,
            walls: WallMode::default(),
            obj: ObjOptions::default(),
            material: SurfaceMaterial::default(),
        }
    }
}

/// Outcome of one regional export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Region name.
    pub name: String,
    /// Written OBJ file.
    pub obj_path: PathBuf,
    /// Written MTL file.
    pub mtl_path: PathBuf,
    /// Rows of the cropped grid.
    pub rows: usize,
    /// Columns of the cropped grid.
    pub cols: usize,
    /// Vertices written.
    pub vertex_count: usize,
    /// Faces written.
    pub face_count: usize,
    /// Model extent in millimeters.
    pub size: Vector3<f64>,
    /// Topology check of the written mesh.
    pub report: MeshReport,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}x{} grid, {} vertices, {} faces, {:.1} × {:.1} × {:.1} mm -> {}",
            self.name,
            self.rows,
            self.cols,
            self.vertex_count,
            self.face_count,
            self.size.x,
            self.size.y,
            self.size.z,
            self.obj_path.display()
        )
    }
}

/// Reconstruct the lattice and transform its values into heights.
///
/// Logs the latitude, longitude and raw value ranges of the lattice.
///
/// # Errors
///
/// - [`ReliefError::Grid`] if the samples do not form a complete lattice
/// - [`ReliefError::Field`] if the values cannot be transformed
///
/// # Example
///
/// ```
/// use relief::prelude::*;
///
/// let samples: Vec<Sample> = (0..9)
///     .map(|i| Sample::new((i / 3) as f64, (i % 3) as f64, (i * 10) as f64))
///     .collect();
/// let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();
///
/// assert_eq!(lattice.shape(), (3, 3));
/// assert_eq!(heights.shape(), (3, 3));
/// ```
pub fn prepare_heights(
    samples: &[Sample],
    params: &FieldParams,
) -> ReliefResult<(Lattice, Grid<f64>)> {
    let lattice = Lattice::reconstruct(samples)?;
    info!(
        rows = lattice.rows(),
        cols = lattice.cols(),
        "Reconstructed lattice"
    );
    debug!(range = %FieldSummary::of(&lattice.lat_grid), "Latitude");
    debug!(range = %FieldSummary::of(&lattice.lon_grid), "Longitude");
    debug!(range = %FieldSummary::of(&lattice.value_grid), "Potential");

    let heights = transform_field(&lattice.value_grid, params)?;
    debug!(range = %FieldSummary::of(&heights), "Heights (mm)");
    Ok((lattice, heights))
}

/// Crop, build, check and write one regional model.
///
/// # Errors
///
/// - [`ReliefError::Grid`] if `heights` does not match the lattice or the
///   window matches no cells
/// - [`ReliefError::Build`] if the cropped grid cannot form a solid
/// - [`ReliefError::Io`] if writing fails
pub fn export_region(
    lattice: &Lattice,
    heights: &Grid<f64>,
    region: &RegionExport,
    out_dir: &Path,
    options: &ExportOptions,
) -> ReliefResult<ExportSummary> {
    let cropped = crop(&lattice.lon_grid, &lattice.lat_grid, heights, &region.window)?;
    let (rows, cols) = cropped.height_grid.shape();

    let params = MeshParams::default()
        .with_xy_scale(region.xy_scale)
        .with_base(options.add_base)
        .with_walls(options.walls);
    let built = build_relief(
        &cropped.lon_grid,
        &cropped.lat_grid,
        &cropped.height_grid,
        &params,
    )?;

    let report = validate_relief(&built.mesh);
    if options.add_base && !report.is_watertight {
        warn!(
            region = %region.name,
            boundary_edges = report.boundary_edge_count,
            "Solid is not watertight"
        );
    }

    let bounds = built.mesh.bounds();
    let size = if bounds.is_empty() {
        Vector3::zeros()
    } else {
        bounds.max.coords
    };

    let path = out_dir.join(format!("{}.obj", region.name));
    let written = save_obj_with_material(&built.mesh, &path, &options.obj, &options.material)?;

    let summary = ExportSummary {
        name: region.name.clone(),
        obj_path: written.obj_path,
        mtl_path: written.mtl_path,
        rows,
        cols,
        vertex_count: built.vertex_count(),
        face_count: built.face_count(),
        size,
        report,
    };
    info!(
        region = %summary.name,
        vertices = summary.vertex_count,
        faces = summary.face_count,
        path = %summary.obj_path.display(),
        "Exported region"
    );
    Ok(summary)
}

/// Export every region in order into `out_dir`, creating it if needed.
///
/// Regions whose window matches no cells, or too few rows or columns to form
/// a surface, are skipped with a warning; any other error stops the run.
///
/// # Errors
///
/// See [`export_region`]; also fails if `out_dir` cannot be created.
pub fn export_regions(
    lattice: &Lattice,
    heights: &Grid<f64>,
    regions: &[RegionExport],
    out_dir: &Path,
    options: &ExportOptions,
) -> ReliefResult<Vec<ExportSummary>> {
    std::fs::create_dir_all(out_dir)?;

    let mut summaries = Vec::with_capacity(regions.len());
    for region in regions {
        match export_region(lattice, heights, region, out_dir, options) {
            Ok(summary) => summaries.push(summary),
            Err(ReliefError::Grid(GridError::EmptyRegion { .. })) => {
                warn!(region = %region.name, "Window matches no cells, skipping");
            }
            Err(ReliefError::Build(BuildError::GridTooSmall { rows, cols })) => {
                warn!(
                    region = %region.name,
                    rows,
                    cols,
                    "Window covers too few cells for a surface, skipping"
                );
            }
            Err(err) => return Err(err),
        }
    }
    Ok(summaries)
}
