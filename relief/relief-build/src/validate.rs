//! Printability report for relief meshes.

use std::fmt;

use relief_types::ReliefMesh;

use crate::adjacency::EdgeAdjacency;

/// Topology and winding summary of a relief mesh.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Total number of undirected edges.
    pub edge_count: usize,

    /// Edges with only one adjacent face.
    pub boundary_edge_count: usize,
    /// Edges with more than two adjacent faces.
    pub non_manifold_edge_count: usize,
    /// Faces referencing index 0 or an index past the last vertex.
    pub invalid_index_count: usize,

    /// No boundary edges.
    pub is_watertight: bool,
    /// No non-manifold edges.
    pub is_manifold: bool,
    /// Negative signed volume. Only meaningful for watertight meshes.
    pub is_inside_out: bool,
    /// Signed volume in cubic millimeters.
    pub volume: f64,
}

impl MeshReport {
    /// Watertight, manifold, outward wound, and every index valid.
    #[must_use]
    pub fn is_printable(&self) -> bool {
        self.is_watertight
            && self.is_manifold
            && !self.is_inside_out
            && self.invalid_index_count == 0
    }

    /// Any boundary, non-manifold, or invalid-index problem.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }

    /// Sum of all problem counts.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.boundary_edge_count + self.non_manifold_edge_count + self.invalid_index_count
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Relief Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Volume: {:.1} mm^3", self.volume)?;
        writeln!(f)?;
        writeln!(f, "  Status:")?;
        writeln!(f, "    Watertight: {}", yes_no(self.is_watertight))?;
        writeln!(f, "    Manifold: {}", yes_no(self.is_manifold))?;
        writeln!(
            f,
            "    Winding: {}",
            if self.is_inside_out { "Inside-out" } else { "Correct" }
        )?;

        if self.has_issues() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            if self.boundary_edge_count > 0 {
                writeln!(f, "    Boundary edges: {}", self.boundary_edge_count)?;
            }
            if self.non_manifold_edge_count > 0 {
                writeln!(f, "    Non-manifold edges: {}", self.non_manifold_edge_count)?;
            }
            if self.invalid_index_count > 0 {
                writeln!(f, "    Invalid face indices: {}", self.invalid_index_count)?;
            }
        }

        Ok(())
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Check a relief mesh for printability.
///
/// # Example
///
/// ```
/// use relief_build::{build_relief, validate_relief, MeshParams};
/// use relief_grid::Grid;
///
/// let lon = Grid::from_fn(3, 3, |_, c| c as f64);
/// let lat = Grid::from_fn(3, 3, |r, _| -(r as f64));
/// let height = Grid::filled(3, 3, 5.0);
///
/// let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();
/// let report = validate_relief(&built.mesh);
/// assert!(report.is_printable());
/// ```
#[must_use]
pub fn validate_relief(mesh: &ReliefMesh) -> MeshReport {
    let adjacency = EdgeAdjacency::build(&mesh.faces);
    let vertex_count = mesh.vertex_count();

    let invalid_index_count = mesh
        .faces
        .iter()
        .filter(|face| {
            face.iter()
                .any(|&i| i == 0 || usize::try_from(i).map_or(true, |i| i > vertex_count))
        })
        .count();

    let volume = mesh.signed_volume();

    MeshReport {
        vertex_count,
        face_count: mesh.face_count(),
        edge_count: adjacency.edge_count(),
        boundary_edge_count: adjacency.boundary_edge_count(),
        non_manifold_edge_count: adjacency.non_manifold_edge_count(),
        invalid_index_count,
        is_watertight: adjacency.is_watertight(),
        is_manifold: adjacency.is_manifold(),
        is_inside_out: volume < 0.0,
        volume,
    }
}
