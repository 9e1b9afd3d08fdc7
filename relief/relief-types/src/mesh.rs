//! Triangle mesh with 1-based face indices.

use nalgebra::{Point3, Vector3};

use crate::{Aabb, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh whose faces reference vertices by 1-based index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` in emission order
/// - `faces`: `Vec<[u32; 3]>`, each entry a 1-based index into `vertices`
///
/// Face `[1, 2, 3]` therefore refers to `vertices[0..3]`.
///
/// # Winding Order
///
/// Faces use counter-clockwise winding when viewed from outside, so a
/// closed, correctly wound mesh has positive [`signed_volume`](Self::signed_volume).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReliefMesh {
    /// Vertex data, in emission order.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as 1-based vertex indices.
    pub faces: Vec<[u32; 3]>,
}

impl ReliefMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Append a vertex and return its 1-based index.
    ///
    /// Returns `None` once the mesh already holds `u32::MAX` vertices.
    pub fn push_vertex(&mut self, vertex: Vertex) -> Option<u32> {
        let index = u32::try_from(self.vertices.len()).ok()?.checked_add(1)?;
        self.vertices.push(vertex);
        Some(index)
    }

    /// Resolve a 1-based vertex index.
    ///
    /// Returns `None` for index `0` and for indices past the end.
    #[must_use]
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        let offset = usize::try_from(index.checked_sub(1)?).ok()?;
        self.vertices.get(offset)
    }

    /// Find the first face referencing a vertex that does not exist.
    ///
    /// Returns the face position and the offending 1-based index.
    #[must_use]
    pub fn first_invalid_face(&self) -> Option<(usize, u32)> {
        self.faces.iter().enumerate().find_map(|(face_idx, face)| {
            face.iter()
                .copied()
                .find(|&i| self.vertex(i).is_none())
                .map(|bad| (face_idx, bad))
        })
    }

    /// Resolve the three corner positions of a face.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<[Point3<f64>; 3]> {
        let [a, b, c] = *self.faces.get(face_index)?;
        Some([
            self.vertex(a)?.position,
            self.vertex(b)?.position,
            self.vertex(c)?.position,
        ])
    }

    /// Unnormalized face normal (right-hand rule over the winding).
    #[must_use]
    pub fn face_normal(&self, face_index: usize) -> Option<Vector3<f64>> {
        let [v0, v1, v2] = self.triangle(face_index)?;
        Some((v1 - v0).cross(&(v2 - v0)))
    }

    /// Axis-aligned bounds of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Sum of signed tetrahedra formed by each face and the origin. Positive
    /// for a closed mesh with outward-facing normals, negative when the mesh
    /// is inside-out. Not meaningful for open meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for face_index in 0..self.faces.len() {
            let Some([v0, v1, v2]) = self.triangle(face_index) else {
                continue;
            };
            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }
}
