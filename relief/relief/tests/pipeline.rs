//! End-to-end tests: samples to OBJ/MTL files.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss, clippy::float_cmp)]

use relief::build::BuildError;
use relief::prelude::*;

/// A 10-degree global lattice in scrambled order.
fn global_samples() -> Vec<Sample> {
    let mut samples = Vec::new();
    for lat_step in 0..17 {
        for lon_step in 0..37 {
            let lat = -80.0 + f64::from(lat_step) * 10.0;
            let lon = -180.0 + f64::from(lon_step) * 10.0;
            let value = (lat + 90.0) * (lon + 200.0);
            samples.push(Sample::new(lat, lon, value));
        }
    }
    // Deterministic scramble.
    let n = samples.len();
    (0..n).map(|i| samples[(i * 7) % n]).collect()
}

/// Parse `v` and `f` lines of an OBJ file.
fn parse_obj(text: &str) -> (usize, Vec<[u32; 3]>) {
    let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
    let faces = text
        .lines()
        .filter_map(|l| l.strip_prefix("f "))
        .map(|rest| {
            let idx: Vec<u32> = rest.split_whitespace().map(|t| t.parse().unwrap()).collect();
            [idx[0], idx[1], idx[2]]
        })
        .collect();
    (vertices, faces)
}

#[test]
fn exports_every_standard_region() {
    let (lattice, heights) = prepare_heights(&global_samples(), &FieldParams::default()).unwrap();
    assert_eq!(lattice.shape(), (17, 37));
    assert_eq!(lattice.value_grid[(0, 0)], (80.0 + 90.0) * (-180.0 + 200.0));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("models");
    let summaries = export_regions(
        &lattice,
        &heights,
        &default_regions(),
        &out,
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(summaries.len(), 5);
    for summary in &summaries {
        assert!(summary.report.is_printable(), "{}", summary.name);
        assert_eq!(summary.mtl_path, summary.obj_path.with_extension("mtl"));
        assert!(summary.mtl_path.exists());

        let text = std::fs::read_to_string(&summary.obj_path).unwrap();
        let (vertex_count, faces) = parse_obj(&text);
        assert_eq!(vertex_count, summary.vertex_count);
        assert_eq!(faces.len(), summary.face_count);
        assert!(
            faces
                .iter()
                .flatten()
                .all(|&i| i >= 1 && i as usize <= vertex_count)
        );
    }

    let golden = summaries.iter().find(|s| s.name == "golden_triangle").unwrap();
    // Longitudes 90, 100, 110 and latitudes 20, 30.
    assert_eq!((golden.rows, golden.cols), (2, 3));
    approx::assert_relative_eq!(golden.size.x, 20.0 * 5.0);
    approx::assert_relative_eq!(golden.size.y, 10.0 * 5.0);
}

#[test]
fn skips_regions_outside_the_data() {
    let samples: Vec<Sample> = (0..12)
        .map(|i| Sample::new(f64::from(i / 4), f64::from(i % 4), f64::from(i)))
        .collect();
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();

    let regions = vec![
        RegionExport::new("local", "Whole grid"),
        RegionExport::new("far_away", "No data").with_window(
            CropWindow::new().with_lon(CoordRange::new(100.0, 120.0).unwrap()),
        ),
    ];

    let dir = tempfile::tempdir().unwrap();
    let summaries = export_regions(
        &lattice,
        &heights,
        &regions,
        dir.path(),
        &ExportOptions::default(),
    )
    .unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "local");
    assert!(!dir.path().join("far_away.obj").exists());
}

#[test]
fn coarse_lattice_skips_regions_too_thin_to_build() {
    // 20-degree latitude steps: -90, -70, ..., 90.
    let mut samples = Vec::new();
    for lat_step in 0..10 {
        for lon_step in 0..37 {
            let lat = -90.0 + f64::from(lat_step) * 20.0;
            let lon = -180.0 + f64::from(lon_step) * 10.0;
            samples.push(Sample::new(lat, lon, f64::from(lat_step * lon_step)));
        }
    }
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let summaries = export_regions(
        &lattice,
        &heights,
        &default_regions(),
        dir.path(),
        &ExportOptions::default(),
    )
    .unwrap();

    // golden_triangle (15..30 N) holds only the 30 N row.
    let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "world_full",
            "western_hemisphere",
            "eastern_hemisphere",
            "asia_pacific"
        ]
    );
    assert!(!dir.path().join("golden_triangle.obj").exists());
}

#[test]
fn single_region_too_thin_is_error() {
    let samples: Vec<Sample> = (0..6)
        .map(|i| Sample::new(f64::from(i / 3) * 10.0, f64::from(i % 3), f64::from(i)))
        .collect();
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();
    let region = RegionExport::new("strip", "").with_window(
        CropWindow::new().with_lat(CoordRange::new(5.0, 15.0).unwrap()),
    );

    let dir = tempfile::tempdir().unwrap();
    let err = export_region(&lattice, &heights, &region, dir.path(), &ExportOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ReliefError::Build(BuildError::GridTooSmall { rows: 1, cols: 3 })
    ));
}

#[test]
fn single_region_empty_window_is_error() {
    let samples: Vec<Sample> = (0..4)
        .map(|i| Sample::new(f64::from(i / 2), f64::from(i % 2), f64::from(i)))
        .collect();
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();
    let region = RegionExport::new("nowhere", "").with_window(
        CropWindow::new().with_lat(CoordRange::new(50.0, 60.0).unwrap()),
    );

    let dir = tempfile::tempdir().unwrap();
    let err = export_region(&lattice, &heights, &region, dir.path(), &ExportOptions::default())
        .unwrap_err();
    assert!(err.is_empty_region());
}

#[test]
fn incomplete_lattice_is_reported() {
    let mut samples = global_samples();
    samples.pop();
    let err = prepare_heights(&samples, &FieldParams::default()).unwrap_err();
    assert!(err.is_lattice_error());
}

#[test]
fn negative_potential_is_domain_error() {
    let samples = vec![
        Sample::new(0.0, 0.0, 1.0),
        Sample::new(0.0, 1.0, -5.0),
        Sample::new(1.0, 0.0, 2.0),
        Sample::new(1.0, 1.0, 3.0),
    ];
    let err = prepare_heights(&samples, &FieldParams::default()).unwrap_err();
    assert!(err.is_domain_error());
}

#[test]
fn missing_values_become_holes() {
    let samples: Vec<Sample> = (0..25)
        .map(|i| {
            let value = if i == 12 { f64::NAN } else { f64::from(i) };
            Sample::new(f64::from(i / 5), f64::from(i % 5), value)
        })
        .collect();
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();
    assert!(heights[(2, 2)].is_nan());

    let dir = tempfile::tempdir().unwrap();
    let region = RegionExport::new("holey", "");

    let open = export_region(&lattice, &heights, &region, dir.path(), &ExportOptions::default())
        .unwrap();
    assert!(!open.report.is_watertight);
    assert_eq!(open.vertex_count, 2 * 24);

    let options = ExportOptions {
        walls: WallMode::Boundary,
        ..ExportOptions::default()
    };
    let closed = export_region(&lattice, &heights, &region, dir.path(), &options).unwrap();
    assert!(closed.report.is_printable());
}

#[test]
fn surface_only_export() {
    let samples: Vec<Sample> = (0..9)
        .map(|i| Sample::new(f64::from(i / 3), f64::from(i % 3), f64::from(i * i)))
        .collect();
    let (lattice, heights) = prepare_heights(&samples, &FieldParams::raw()).unwrap();
    let options = ExportOptions {
        add_base: false,
        ..ExportOptions::default()
    };

    let dir = tempfile::tempdir().unwrap();
    let summary = export_region(
        &lattice,
        &heights,
        &RegionExport::new("top", ""),
        dir.path(),
        &options,
    )
    .unwrap();

    assert_eq!(summary.vertex_count, 9);
    assert_eq!(summary.face_count, 8);
    assert!(!summary.report.is_watertight);
}
