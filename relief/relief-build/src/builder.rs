//! Height grid to closed solid.
//!
//! Vertex layout of a built mesh:
//!
//! ```text
//! 1 ..= T          top vertices, row-major over finite cells
//! T+1 ..= 2T       base vertices at z = 0, same order (only with a base)
//! ```
//!
//! Face layout: top faces, then base faces, then side walls.

use relief_grid::Grid;
use relief_types::{ReliefMesh, Vertex};
use tracing::{debug, warn};

use crate::error::{BuildError, BuildResult};
use crate::index_map::VertexIndexMap;
use crate::params::{MeshParams, WallMode};
use crate::walls::{perimeter_walls, rim_walls};

/// Face counts and hole statistics of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    /// Triangles on the top surface.
    pub top_faces: usize,
    /// Triangles on the base plate.
    pub base_faces: usize,
    /// Triangles on the side walls.
    pub wall_faces: usize,
    /// Cells without a finite height.
    pub holes: usize,
    /// Quads skipped because a corner is a hole.
    pub skipped_quads: usize,
}

/// A built relief: mesh, index map, and statistics.
#[derive(Debug, Clone)]
pub struct ReliefBuild {
    /// The triangle mesh, with 1-based faces.
    pub mesh: ReliefMesh,
    /// Cell to vertex mapping used to build the mesh.
    pub index_map: VertexIndexMap,
    /// Face counts.
    pub stats: BuildStats,
}

impl ReliefBuild {
    /// Total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Total number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// 1-based index of the first base vertex, if a base was emitted.
    #[must_use]
    pub const fn base_vertex_start(&self) -> Option<u32> {
        self.index_map.base_vertex_start()
    }
}

/// Fluent builder for relief meshes.
///
/// # Example
///
/// ```
/// use relief_build::{ReliefBuilder, WallMode};
/// use relief_grid::Grid;
///
/// let lon = Grid::from_fn(3, 4, |_, c| c as f64);
/// let lat = Grid::from_fn(3, 4, |r, _| 10.0 - r as f64);
/// let height = Grid::filled(3, 4, 4.0);
///
/// let built = ReliefBuilder::new(&lon, &lat, &height)
///     .xy_scale(5.0)
///     .walls(WallMode::Boundary)
///     .build()
///     .unwrap();
///
/// assert_eq!(built.vertex_count(), 24);
/// assert_eq!(built.base_vertex_start(), Some(13));
/// ```
pub struct ReliefBuilder<'a> {
    lon: &'a Grid<f64>,
    lat: &'a Grid<f64>,
    height: &'a Grid<f64>,
    params: MeshParams,
}

impl<'a> ReliefBuilder<'a> {
    /// Create a builder over three index-aligned grids with default parameters.
    #[must_use]
    pub fn new(lon: &'a Grid<f64>, lat: &'a Grid<f64>, height: &'a Grid<f64>) -> Self {
        Self {
            lon,
            lat,
            height,
            params: MeshParams::default(),
        }
    }

    /// Replace all parameters.
    #[must_use]
    pub fn params(mut self, params: MeshParams) -> Self {
        self.params = params;
        self
    }

    /// Set the horizontal scale in millimeters per degree.
    #[must_use]
    pub const fn xy_scale(mut self, xy_scale: f64) -> Self {
        self.params.xy_scale = xy_scale;
        self
    }

    /// Enable or disable the base plate and walls.
    #[must_use]
    pub const fn add_base(mut self, add_base: bool) -> Self {
        self.params.add_base = add_base;
        self
    }

    /// Set the side-wall strategy.
    #[must_use]
    pub const fn walls(mut self, walls: WallMode) -> Self {
        self.params.walls = walls;
        self
    }

    /// Build the mesh.
    ///
    /// # Errors
    ///
    /// See [`build_relief`].
    pub fn build(self) -> BuildResult<ReliefBuild> {
        build_relief(self.lon, self.lat, self.height, &self.params)
    }
}

/// Build a solid from index-aligned longitude, latitude and height grids.
///
/// Vertex positions are `(lon * xy_scale, lat * xy_scale, height)`, shifted so
/// the smallest x and y over the grid are 0. Cells whose height is not finite
/// are holes: they get no vertex and every quad touching them is skipped.
///
/// Faces are laid out for rows running north to south and columns running
/// west to east. A grid with exactly one of those axes reversed would come
/// out mirrored, so its faces are rewound to keep normals outward.
///
/// # Errors
///
/// - [`BuildError::InvalidScale`] if `xy_scale` is not finite and positive
/// - [`BuildError::Grid`] if the grids differ in shape
/// - [`BuildError::GridTooSmall`] if the grid is smaller than 2x2
/// - [`BuildError::NonFiniteCoordinate`] if any longitude or latitude is not finite
/// - [`BuildError::IndexOverflow`] if the vertex count exceeds `u32` indexing
pub fn build_relief(
    lon: &Grid<f64>,
    lat: &Grid<f64>,
    height: &Grid<f64>,
    params: &MeshParams,
) -> BuildResult<ReliefBuild> {
    params.validate()?;
    lon.ensure_same_shape(height)?;
    lat.ensure_same_shape(height)?;

    let (rows, cols) = height.shape();
    if rows < 2 || cols < 2 {
        return Err(BuildError::GridTooSmall { rows, cols });
    }

    let (x_min, y_min) = coordinate_minimums(lon, lat, params.xy_scale)?;

    let overflow = || BuildError::IndexOverflow {
        vertices: height.len() * if params.add_base { 2 } else { 1 },
    };
    let mut index_map =
        VertexIndexMap::from_mask(rows, cols, height.iter().map(|h| h.is_finite())).ok_or_else(overflow)?;
    if params.add_base {
        index_map = index_map.with_base().ok_or_else(overflow)?;
    }

    let top_count = index_map.top_vertex_count() as usize;
    let vertex_total = if params.add_base { top_count * 2 } else { top_count };
    debug!(rows, cols, vertices = vertex_total, "Building relief mesh");

    let mut mesh = ReliefMesh::with_capacity(vertex_total, 4 * (rows - 1) * (cols - 1));

    // Top vertices, then base vertices in the same order.
    let position = |r: usize, c: usize| {
        (
            lon[(r, c)] * params.xy_scale - x_min,
            lat[(r, c)] * params.xy_scale - y_min,
        )
    };
    for (r, c, _) in index_map.iter() {
        let (x, y) = position(r, c);
        mesh.vertices.push(Vertex::from_coords(x, y, height[(r, c)]));
    }
    if params.add_base {
        for (r, c, _) in index_map.iter() {
            let (x, y) = position(r, c);
            mesh.vertices.push(Vertex::from_coords(x, y, 0.0));
        }
    }

    let (top_faces, skipped_quads) = top_surface(&index_map);
    mesh.faces.extend_from_slice(&top_faces);

    let mut stats = BuildStats {
        top_faces: top_faces.len(),
        holes: index_map.hole_count(),
        skipped_quads,
        ..BuildStats::default()
    };

    if params.add_base {
        let base = base_plate(&index_map);
        stats.base_faces = base.len();
        mesh.faces.extend(base);

        let walls = match params.walls {
            WallMode::Perimeter => perimeter_walls(&index_map),
            WallMode::Boundary => rim_walls(&index_map, &top_faces),
        };
        stats.wall_faces = walls.len();
        mesh.faces.extend(walls);

        if stats.holes > 0 && params.walls == WallMode::Perimeter {
            warn!(
                holes = stats.holes,
                "Grid has holes; perimeter walls leave their edges open"
            );
        }
    }

    if is_mirrored(lon, lat) {
        debug!("Grid axes are mirrored; reversing face winding");
        for face in &mut mesh.faces {
            face.swap(1, 2);
        }
    }

    debug!(
        top = stats.top_faces,
        base = stats.base_faces,
        walls = stats.wall_faces,
        skipped = stats.skipped_quads,
        "Generated faces"
    );

    Ok(ReliefBuild {
        mesh,
        index_map,
        stats,
    })
}

/// Smallest scaled x and y over every cell.
fn coordinate_minimums(lon: &Grid<f64>, lat: &Grid<f64>, xy_scale: f64) -> BuildResult<(f64, f64)> {
    let mut x_min = f64::INFINITY;
    let mut y_min = f64::INFINITY;
    for (((row, col), &lo), &la) in lon.indexed_iter().zip(lat.iter()) {
        if !lo.is_finite() || !la.is_finite() {
            return Err(BuildError::NonFiniteCoordinate { row, col });
        }
        x_min = x_min.min(lo * xy_scale);
        y_min = y_min.min(la * xy_scale);
    }
    Ok((x_min, y_min))
}

/// `true` when exactly one grid axis runs against the north-first,
/// west-first layout.
fn is_mirrored(lon: &Grid<f64>, lat: &Grid<f64>) -> bool {
    let (rows, cols) = lat.shape();
    let rows_run_north = lat[(rows - 1, 0)] > lat[(0, 0)];
    let cols_run_west = lon[(0, cols - 1)] < lon[(0, 0)];
    rows_run_north != cols_run_west
}

/// The four corner indices of quad `(i, j)`, if none is a hole.
///
/// Corners are `(i, j)`, `(i, j+1)`, `(i+1, j+1)`, `(i+1, j)`, i.e. north-west,
/// north-east, south-east, south-west.
#[inline]
fn quad(i: usize, j: usize, lookup: impl Fn(usize, usize) -> Option<u32>) -> Option<[u32; 4]> {
    Some([lookup(i, j)?, lookup(i, j + 1)?, lookup(i + 1, j + 1)?, lookup(i + 1, j)?])
}

/// Top-surface triangles, counter-clockwise seen from above.
///
/// Returns the faces and the number of quads skipped for holes.
fn top_surface(map: &VertexIndexMap) -> (Vec<[u32; 3]>, usize) {
    let mut faces = Vec::with_capacity(2 * (map.rows() - 1) * (map.cols() - 1));
    let mut skipped = 0;
    for i in 0..map.rows() - 1 {
        for j in 0..map.cols() - 1 {
            match quad(i, j, |r, c| map.top(r, c)) {
                // Split along the (i,j)-(i+1,j+1) diagonal.
                Some([nw, ne, se, sw]) => {
                    faces.push([nw, sw, se]);
                    faces.push([nw, se, ne]);
                }
                None => skipped += 1,
            }
        }
    }
    (faces, skipped)
}

/// Base-plate triangles, the top quads with reversed winding.
fn base_plate(map: &VertexIndexMap) -> Vec<[u32; 3]> {
    let mut faces = Vec::with_capacity(2 * (map.rows() - 1) * (map.cols() - 1));
    for i in 0..map.rows() - 1 {
        for j in 0..map.cols() - 1 {
            if let Some([nw, ne, se, sw]) = quad(i, j, |r, c| map.base(r, c)) {
                faces.push([nw, se, sw]);
                faces.push([nw, ne, se]);
            }
        }
    }
    faces
}
