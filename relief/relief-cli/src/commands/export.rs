//! `relief export`

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use relief::prelude::*;
use tracing::info;

/// Arguments for `relief export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Potential CSV (type,population,latitude,longitude,potential; no header)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the OBJ/MTL files
    #[arg(short, long, default_value = "models")]
    pub output_dir: PathBuf,

    /// Minimum model thickness in mm
    #[arg(long, default_value_t = 2.0)]
    pub base_thickness: f64,

    /// Height added at the maximum normalized value, in mm
    #[arg(long, default_value_t = 50.0)]
    pub height_scale: f64,

    /// Height cap in mm
    #[arg(long, default_value_t = 150.0)]
    pub max_height: f64,

    /// Number of 3x3 smoothing passes
    #[arg(long, default_value_t = 2)]
    pub smooth_passes: u32,

    /// Percentile above which peaks are damped
    #[arg(long, default_value_t = 98.0)]
    pub spike_percentile: f64,

    /// Factor applied to peaks above the percentile
    #[arg(long, default_value_t = 0.95)]
    pub spike_damping: f64,

    /// Export only these standard regions (repeatable)
    #[arg(short, long = "region", value_name = "NAME", conflicts_with = "name")]
    pub regions: Vec<String>,

    /// Export one custom region with this name instead of the standard set
    #[arg(long)]
    pub name: Option<String>,

    /// Custom region: western bound in degrees
    #[arg(long, requires_all = ["name", "lon_max"], allow_negative_numbers = true)]
    pub lon_min: Option<f64>,

    /// Custom region: eastern bound in degrees
    #[arg(long, requires_all = ["name", "lon_min"], allow_negative_numbers = true)]
    pub lon_max: Option<f64>,

    /// Custom region: southern bound in degrees
    #[arg(long, requires_all = ["name", "lat_max"], allow_negative_numbers = true)]
    pub lat_min: Option<f64>,

    /// Custom region: northern bound in degrees
    #[arg(long, requires_all = ["name", "lat_min"], allow_negative_numbers = true)]
    pub lat_max: Option<f64>,

    /// Custom region: horizontal scale in mm per degree [default: 2.0]
    #[arg(long, requires = "name")]
    pub xy_scale: Option<f64>,

    /// Top surface only, without base plate or side walls
    #[arg(long)]
    pub no_base: bool,

    /// Wall around interior holes as well as the grid edges
    #[arg(long, conflicts_with = "no_base")]
    pub close_holes: bool,
}

impl ExportArgs {
    fn field_params(&self) -> FieldParams {
        FieldParams::default()
            .with_base_thickness(self.base_thickness)
            .with_height_scale(self.height_scale)
            .with_max_height(self.max_height)
            .with_smooth_passes(self.smooth_passes)
            .with_spike_damping(self.spike_percentile, self.spike_damping)
    }

    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            add_base: !self.no_base,
            walls: if self.close_holes {
                WallMode::Boundary
            } else {
                WallMode::Perimeter
            },
            ..ExportOptions::default()
        }
    }

    fn regions(&self) -> Result<Vec<RegionExport>> {
        if let Some(name) = &self.name {
            let mut window = CropWindow::new();
            if let (Some(min), Some(max)) = (self.lon_min, self.lon_max) {
                window = window.with_lon(CoordRange::new(min, max).context("invalid longitude range")?);
            }
            if let (Some(min), Some(max)) = (self.lat_min, self.lat_max) {
                window = window.with_lat(CoordRange::new(min, max).context("invalid latitude range")?);
            }
            let mut region = RegionExport::new(name.clone(), "Custom region").with_window(window);
            if let Some(xy_scale) = self.xy_scale {
                region = region.with_xy_scale(xy_scale);
            }
            return Ok(vec![region]);
        }

        let standard = default_regions();
        if self.regions.is_empty() {
            return Ok(standard);
        }

        let mut selected = Vec::with_capacity(self.regions.len());
        for wanted in &self.regions {
            match standard.iter().find(|r| &r.name == wanted) {
                Some(region) => selected.push(region.clone()),
                None => bail!(
                    "unknown region '{wanted}' (run `relief regions` for the list)"
                ),
            }
        }
        Ok(selected)
    }
}

/// Run `relief export`.
pub fn execute(args: &ExportArgs) -> Result<()> {
    let regions = args.regions()?;
    let params = args.field_params();
    params.validate().context("invalid height parameters")?;

    let samples = load_samples(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(count = samples.len(), path = %args.input.display(), "Loaded samples");

    let (lattice, heights) =
        prepare_heights(&samples, &params).context("failed to prepare heights")?;

    let summaries = export_regions(
        &lattice,
        &heights,
        &regions,
        &args.output_dir,
        &args.export_options(),
    )
    .context("export failed")?;

    for summary in &summaries {
        println!("{summary}");
    }
    println!(
        "Exported {} of {} regions to {}",
        summaries.len(),
        regions.len(),
        args.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ExportArgs,
    }

    fn parse(argv: &[&str]) -> Result<ExportArgs, clap::Error> {
        let mut full = vec!["export"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).map(|h| h.args)
    }

    #[test]
    fn defaults_match_library_defaults() {
        let args = parse(&["-i", "p.csv"]).unwrap();
        assert_eq!(args.field_params(), FieldParams::default());
        assert_eq!(args.export_options(), ExportOptions::default());
        assert_eq!(args.regions().unwrap().len(), 5);
    }

    #[test]
    fn selects_named_regions() {
        let args = parse(&["-i", "p.csv", "-r", "asia_pacific", "-r", "world_full"]).unwrap();
        let names: Vec<_> = args.regions().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["asia_pacific", "world_full"]);

        let args = parse(&["-i", "p.csv", "-r", "atlantis"]).unwrap();
        assert!(args.regions().is_err());
    }

    #[test]
    fn custom_window_with_one_axis() {
        let args = parse(&[
            "-i", "p.csv", "--name", "andes", "--lon-min", "-80", "--lon-max", "-60", "--xy-scale", "4",
        ])
        .unwrap();
        let regions = args.regions().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "andes");
        assert_eq!(regions[0].xy_scale, 4.0);
        assert_eq!(regions[0].window.lon, Some(CoordRange::new(-80.0, -60.0).unwrap()));
        assert_eq!(regions[0].window.lat, None);
    }

    #[test]
    fn bounds_require_pairs_and_name() {
        assert!(parse(&["-i", "p.csv", "--name", "x", "--lon-min", "1"]).is_err());
        assert!(parse(&["-i", "p.csv", "--lat-min", "1", "--lat-max", "2"]).is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let args = parse(&["-i", "p.csv", "--name", "x", "--lat-min", "10", "--lat-max", "5"]).unwrap();
        assert!(args.regions().is_err());
    }

    #[test]
    fn wall_flags() {
        let args = parse(&["-i", "p.csv", "--close-holes"]).unwrap();
        assert_eq!(args.export_options().walls, WallMode::Boundary);

        let args = parse(&["-i", "p.csv", "--no-base"]).unwrap();
        assert!(!args.export_options().add_base);

        assert!(parse(&["-i", "p.csv", "--no-base", "--close-holes"]).is_err());
    }
}
