//! Side walls joining the top surface to the base plate.
//!
//! Two strategies:
//!
//! - [`perimeter_walls`] walks the four edges of the grid rectangle and
//!   walls each consecutive pair of valid cells.
//! - [`rim_walls`] walls every boundary edge of the top surface, so loops
//!   around interior holes are closed as well.
//!
//! Both rely on base vertices sitting at a fixed index offset from their top
//! vertices.

use nalgebra::Vector2;

use crate::adjacency::directed_boundary_edges;
use crate::index_map::VertexIndexMap;

/// One of the four edges of the grid rectangle.
///
/// Row 0 is the northern (highest latitude) row and column 0 the western
/// (lowest longitude) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridEdge {
    /// First row.
    North,
    /// Last row.
    South,
    /// First column.
    West,
    /// Last column.
    East,
}

impl GridEdge {
    /// All four edges in emission order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Direction pointing away from the solid, in model `(x, y)`.
    #[must_use]
    pub fn outward(self) -> Vector2<f64> {
        match self {
            Self::North => Vector2::new(0.0, 1.0),
            Self::South => Vector2::new(0.0, -1.0),
            Self::West => Vector2::new(-1.0, 0.0),
            Self::East => Vector2::new(1.0, 0.0),
        }
    }

    /// Cells along this edge in increasing row or column order.
    fn cells(self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        match self {
            Self::North => (0..cols).map(|c| (0, c)).collect(),
            Self::South => (0..cols).map(|c| (rows - 1, c)).collect(),
            Self::West => (0..rows).map(|r| (r, 0)).collect(),
            Self::East => (0..rows).map(|r| (r, cols - 1)).collect(),
        }
    }
}

/// Model-space step from cell `a` to cell `b`.
///
/// Columns run toward `+x`; rows run south, toward `-y`. Grids laid out
/// otherwise are rewound as a whole by [`build_relief`](crate::build_relief).
#[allow(clippy::cast_precision_loss)]
fn model_step(a: (usize, usize), b: (usize, usize)) -> Vector2<f64> {
    let dc = b.1 as f64 - a.1 as f64;
    let dr = b.0 as f64 - a.0 as f64;
    Vector2::new(dc, -dr)
}

/// Two triangles joining top edge `a -> b` to its base copy.
///
/// `a -> b` must run with the solid on its left (seen from above); the quad
/// normal then points to its right, away from the solid.
#[inline]
fn wall_quad(a: u32, b: u32, offset: u32) -> [[u32; 3]; 2] {
    [[a, a + offset, b + offset], [a, b + offset, b]]
}

/// Wall one segment between two adjacent edge cells.
///
/// Orders the pair so the solid lies to the left of the walk, given the
/// outward direction of the edge it sits on. Returns `None` when either
/// cell is a hole.
fn wall_segment(
    map: &VertexIndexMap,
    a: (usize, usize),
    b: (usize, usize),
    outward: Vector2<f64>,
    offset: u32,
) -> Option<[[u32; 3]; 2]> {
    let top_a = map.top(a.0, a.1)?;
    let top_b = map.top(b.0, b.1)?;

    // Right-hand normal of the walk, (dy, -dx).
    let step = model_step(a, b);
    let right = Vector2::new(step.y, -step.x);

    if right.dot(&outward) > 0.0 {
        Some(wall_quad(top_a, top_b, offset))
    } else {
        Some(wall_quad(top_b, top_a, offset))
    }
}

/// Walls along the four edges of the grid rectangle.
///
/// Pairs with a hole at either end are skipped. Returns no faces when the
/// map carries no base vertices.
#[must_use]
pub fn perimeter_walls(map: &VertexIndexMap) -> Vec<[u32; 3]> {
    let Some(base_start) = map.base_vertex_start() else {
        return Vec::new();
    };
    let offset = base_start - 1;
    let (rows, cols) = (map.rows(), map.cols());
    if rows < 2 || cols < 2 {
        return Vec::new();
    }

    let mut faces = Vec::with_capacity(4 * (rows + cols));
    for edge in GridEdge::ALL {
        let outward = edge.outward();
        let cells = edge.cells(rows, cols);
        for pair in cells.windows(2) {
            if let Some(quad) = wall_segment(map, pair[0], pair[1], outward, offset) {
                faces.extend(quad);
            }
        }
    }
    faces
}

/// Walls along every boundary edge of the top surface.
///
/// `top_faces` must be counter-clockwise seen from above. Each boundary edge
/// is walled in the orientation it has in its face, which closes the outer
/// perimeter and the loop around every interior hole.
#[must_use]
pub fn rim_walls(map: &VertexIndexMap, top_faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let Some(base_start) = map.base_vertex_start() else {
        return Vec::new();
    };
    let offset = base_start - 1;

    directed_boundary_edges(top_faces)
        .into_iter()
        .flat_map(|(a, b)| wall_quad(a, b, offset))
        .collect()
}
