//! Topology tests for built relief solids.
//!
//! Run with: cargo test -p relief-build --test closed_solid

#![allow(clippy::unwrap_used, clippy::cast_precision_loss, clippy::float_cmp)]

use proptest::prelude::*;
use relief_build::{EdgeAdjacency, MeshParams, WallMode, build_relief, validate_relief};
use relief_grid::Grid;

// =============================================================================
// Helpers
// =============================================================================

fn coordinate_grids(rows: usize, cols: usize) -> (Grid<f64>, Grid<f64>) {
    (
        Grid::from_fn(rows, cols, |_, c| 60.0 + c as f64 * 0.25),
        Grid::from_fn(rows, cols, |r, _| 30.0 - r as f64 * 0.25),
    )
}

/// Number of quads with `(row, col)` as a corner.
fn quads_touching(rows: usize, cols: usize, row: usize, col: usize) -> usize {
    let span = |n: usize, k: usize| {
        let lo = k.saturating_sub(1);
        let hi = k.min(n - 2);
        hi + 1 - lo
    };
    span(rows, row) * span(cols, col)
}

fn sorted_faces(faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut faces = faces.to_vec();
    faces.sort_unstable();
    faces
}

// =============================================================================
// Strategies
// =============================================================================

/// A fully finite height grid.
fn arb_heights() -> impl Strategy<Value = Grid<f64>> {
    (2_usize..9, 2_usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(1.0_f64..150.0, rows * cols)
            .prop_map(move |data| Grid::from_vec(rows, cols, data).unwrap())
    })
}

/// A height grid with one hole, plus the hole position.
fn arb_single_hole() -> impl Strategy<Value = (Grid<f64>, usize, usize)> {
    (2_usize..9, 2_usize..9).prop_flat_map(|(rows, cols)| {
        (0..rows, 0..cols).prop_map(move |(hr, hc)| {
            let grid = Grid::from_fn(rows, cols, |r, c| {
                if (r, c) == (hr, hc) { f64::NAN } else { 2.0 + (r + c) as f64 }
            });
            (grid, hr, hc)
        })
    })
}

/// A height grid with an arbitrary hole pattern.
fn arb_holes() -> impl Strategy<Value = Grid<f64>> {
    (2_usize..9, 2_usize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::option::weighted(0.8, 1.0_f64..100.0), rows * cols).prop_map(
            move |cells| {
                let data = cells.into_iter().map(|h| h.unwrap_or(f64::NAN)).collect();
                Grid::from_vec(rows, cols, data).unwrap()
            },
        )
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_based_grid_is_closed_manifold(height in arb_heights()) {
        let (lon, lat) = coordinate_grids(height.rows(), height.cols());
        let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();

        let adjacency = EdgeAdjacency::build(&built.mesh.faces);
        prop_assert!(adjacency.is_closed_manifold());
        prop_assert!(built.mesh.signed_volume() > 0.0);
        prop_assert!(validate_relief(&built.mesh).is_printable());
    }

    #[test]
    fn proptest_wall_modes_agree_without_holes(height in arb_heights()) {
        let (lon, lat) = coordinate_grids(height.rows(), height.cols());
        let perimeter = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();
        let boundary = build_relief(
            &lon,
            &lat,
            &height,
            &MeshParams::default().with_walls(WallMode::Boundary),
        )
        .unwrap();

        prop_assert_eq!(perimeter.stats.wall_faces, boundary.stats.wall_faces);
        prop_assert_eq!(sorted_faces(&perimeter.mesh.faces), sorted_faces(&boundary.mesh.faces));
    }

    #[test]
    fn proptest_single_hole_face_count((height, hr, hc) in arb_single_hole()) {
        let (rows, cols) = height.shape();
        let (lon, lat) = coordinate_grids(rows, cols);
        let built = build_relief(&lon, &lat, &height, &MeshParams::surface_only()).unwrap();

        let k = quads_touching(rows, cols, hr, hc);
        prop_assert_eq!(built.stats.top_faces, 2 * ((rows - 1) * (cols - 1) - k));
        prop_assert_eq!(built.vertex_count(), rows * cols - 1);
    }

    #[test]
    fn proptest_base_index_offset(height in arb_holes()) {
        let (lon, lat) = coordinate_grids(height.rows(), height.cols());
        let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();
        let map = &built.index_map;
        let start = built.base_vertex_start().unwrap();

        for (r, c, top) in map.iter() {
            let base = map.base(r, c).unwrap();
            prop_assert_eq!(base, top + start - 1);

            let top_pos = built.mesh.vertex(top).unwrap().position;
            let base_pos = built.mesh.vertex(base).unwrap().position;
            prop_assert_eq!(top_pos.x, base_pos.x);
            prop_assert_eq!(top_pos.y, base_pos.y);
            prop_assert_eq!(top_pos.z, height[(r, c)]);
            prop_assert_eq!(base_pos.z, 0.0);
        }
    }

    #[test]
    fn proptest_faces_never_reference_holes(height in arb_holes()) {
        let (lon, lat) = coordinate_grids(height.rows(), height.cols());
        let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();

        prop_assert!(built.mesh.first_invalid_face().is_none());
        for v in &built.mesh.vertices {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn proptest_boundary_walls_close_any_holes(height in arb_holes()) {
        let (lon, lat) = coordinate_grids(height.rows(), height.cols());
        let params = MeshParams::default().with_walls(WallMode::Boundary);
        let built = build_relief(&lon, &lat, &height, &params).unwrap();

        let report = validate_relief(&built.mesh);
        prop_assert_eq!(report.boundary_edge_count, 0);
        if built.stats.top_faces > 0 {
            prop_assert!(report.volume > 0.0);
        }
    }
}

// =============================================================================
// Fixed cases
// =============================================================================

#[test]
fn interior_hole_left_open_by_perimeter_walls() {
    let height = Grid::from_fn(5, 5, |r, c| if (r, c) == (2, 2) { f64::NAN } else { 10.0 });
    let (lon, lat) = coordinate_grids(5, 5);
    let built = build_relief(&lon, &lat, &height, &MeshParams::default()).unwrap();

    let report = validate_relief(&built.mesh);
    // Eight-edge ring around the hole, once on top and once on the base.
    assert_eq!(report.boundary_edge_count, 16);
    assert!(!report.is_watertight);
    assert!(report.is_manifold);
}

#[test]
fn interior_hole_closed_by_boundary_walls() {
    let height = Grid::from_fn(5, 5, |r, c| if (r, c) == (2, 2) { f64::NAN } else { 10.0 });
    let (lon, lat) = coordinate_grids(5, 5);
    let params = MeshParams::default().with_walls(WallMode::Boundary);
    let built = build_relief(&lon, &lat, &height, &params).unwrap();

    // Sixteen perimeter edges plus the eight-edge hole ring.
    assert_eq!(built.stats.wall_faces, 2 * (16 + 8));
    assert!(EdgeAdjacency::build(&built.mesh.faces).is_closed_manifold());
    assert!(validate_relief(&built.mesh).is_printable());
}

#[test]
fn three_by_three_without_base() {
    let height = Grid::filled(3, 3, 7.5);
    let (lon, lat) = coordinate_grids(3, 3);
    let built = build_relief(&lon, &lat, &height, &MeshParams::surface_only()).unwrap();
    assert_eq!(built.vertex_count(), 9);
    assert_eq!(built.face_count(), 8);
}

#[test]
fn hole_volume_matches_footprint() {
    // 3x3 slab with one corner missing: three of four unit quads remain.
    let height = Grid::from_fn(3, 3, |r, c| if (r, c) == (0, 0) { f64::NAN } else { 2.0 });
    let lon = Grid::from_fn(3, 3, |_, c| c as f64);
    let lat = Grid::from_fn(3, 3, |r, _| -(r as f64));
    let params = MeshParams::default().with_xy_scale(1.0).with_walls(WallMode::Boundary);
    let built = build_relief(&lon, &lat, &height, &params).unwrap();

    assert!(validate_relief(&built.mesh).is_printable());
    approx::assert_relative_eq!(built.mesh.signed_volume(), 3.0 * 2.0, epsilon = 1e-9);
}
