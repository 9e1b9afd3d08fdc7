//! `relief inspect`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use relief::field::FieldSummary;
use relief::prelude::*;

/// Arguments for `relief inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Potential CSV (type,population,latitude,longitude,potential; no header)
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Run `relief inspect`.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let samples = load_samples(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let lattice = Lattice::reconstruct(&samples).context("samples do not form a lattice")?;

    println!("{}", args.input.display());
    println!("  Samples:   {}", samples.len());
    println!("  Grid:      {} x {}", lattice.rows(), lattice.cols());
    println!("  Latitude:  {}", FieldSummary::of(&lattice.lat_grid));
    println!("  Longitude: {}", FieldSummary::of(&lattice.lon_grid));
    println!("  Potential: {}", FieldSummary::of(&lattice.value_grid));
    Ok(())
}
