//! Edge adjacency for closed-solid checks.
//!
//! Index-agnostic: works on 1-based relief faces as well as 0-based ones.

use hashbrown::HashMap;

/// Edge-to-face adjacency of a triangle list.
///
/// Each undirected edge maps to the faces that use it, so a closed 2-manifold
/// has exactly two faces per edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    /// Maps edge (v0, v1) with v0 < v1 to face indices.
    edge_to_faces: HashMap<(u32, u32), Vec<usize>>,
}

impl EdgeAdjacency {
    /// Build adjacency from a list of faces.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_build::EdgeAdjacency;
    ///
    /// let faces = vec![[1, 2, 3], [2, 4, 3]];
    /// let adj = EdgeAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.edge_count(), 5);
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// ```
    #[must_use]
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> =
            HashMap::with_capacity(faces.len() * 3 / 2);

        for (face_idx, face) in faces.iter().enumerate() {
            for (a, b) in face_edges(face) {
                edge_to_faces
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(face_idx);
            }
        }

        Self { edge_to_faces }
    }

    /// Number of edges used by exactly one face.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() == 1)
            .count()
    }

    /// Number of edges used by more than two faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() > 2)
            .count()
    }

    /// No edge has more than two faces.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() <= 2)
    }

    /// No edge has fewer than two faces.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() >= 2)
    }

    /// Every edge has exactly two faces.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() == 2)
    }

    /// Total number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }
}

/// Boundary edges oriented as they appear in their single face.
///
/// For a consistently wound surface the returned edges run with the surface
/// on their left, which is what rim walls need to wind outward. Output order
/// follows face order, so it is deterministic.
#[must_use]
pub fn directed_boundary_edges(faces: &[[u32; 3]]) -> Vec<(u32, u32)> {
    let mut counts: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
    for face in faces {
        for (a, b) in face_edges(face) {
            *counts.entry(normalize_edge(a, b)).or_insert(0) += 1;
        }
    }

    faces
        .iter()
        .flat_map(face_edges)
        .filter(|&(a, b)| counts.get(&normalize_edge(a, b)) == Some(&1))
        .collect()
}

#[inline]
fn face_edges(face: &[u32; 3]) -> [(u32, u32); 3] {
    [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])]
}

#[inline]
const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
