//! Relief model exporter.
//!
//! # Commands
//!
//! - `relief export` - Build OBJ/MTL models from a potential CSV
//! - `relief regions` - List the standard regional models
//! - `relief inspect` - Show lattice dimensions and value ranges

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Printable relief models from gridded potential fields
#[derive(Parser)]
#[command(name = "relief")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export gridded potential fields as 3D-printable relief models", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build OBJ/MTL models
    Export(commands::export::ExportArgs),
    /// List the standard regions
    Regions,
    /// Show lattice statistics for an input file
    Inspect(commands::inspect::InspectArgs),
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Export(args) => commands::export::execute(&args),
        Commands::Regions => commands::regions::execute(),
        Commands::Inspect(args) => commands::inspect::execute(&args),
    }
}
