//! Potential-field CSV input.
//!
//! Records are headerless rows of
//! `type,population,latitude,longitude,potential`. Only latitude, longitude
//! and potential reach the mesh pipeline.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use relief_grid::Sample;
use serde::Deserialize;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// One row of a potential CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PotentialRecord {
    /// Record type label, e.g. `cluster` or `grid`.
    pub kind: String,
    /// Population attached to the point, if any.
    pub population: Option<f64>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Potential value; an empty field is `None`.
    pub potential: Option<f64>,
}

impl PotentialRecord {
    /// Project onto a lattice sample. A missing potential becomes NaN.
    #[must_use]
    pub fn sample(&self) -> Sample {
        Sample::new(
            self.latitude,
            self.longitude,
            self.potential.unwrap_or(f64::NAN),
        )
    }
}

/// Read potential records from any reader.
///
/// # Errors
///
/// - [`IoError::Csv`] if a row cannot be parsed
/// - [`IoError::EmptyInput`] if there are no rows
pub fn read_records<R: Read>(reader: R) -> IoResult<Vec<PotentialRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize()
        .collect::<Result<Vec<PotentialRecord>, _>>()?;

    if records.is_empty() {
        return Err(IoError::EmptyInput);
    }
    debug!(count = records.len(), "Read potential records");
    Ok(records)
}

/// Read lattice samples from any reader.
///
/// # Errors
///
/// See [`read_records`].
///
/// # Example
///
/// ```
/// use relief_io::read_samples;
///
/// let csv = "grid,0,10.0,20.0,3.5\ngrid,0,10.0,21.0,\n";
/// let samples = read_samples(csv.as_bytes()).unwrap();
///
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples[0].value, 3.5);
/// assert!(samples[1].value.is_nan());
/// ```
pub fn read_samples<R: Read>(reader: R) -> IoResult<Vec<Sample>> {
    Ok(read_records(reader)?.iter().map(PotentialRecord::sample).collect())
}

/// Load lattice samples from a CSV file.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the path does not exist
/// - see [`read_records`] for parse errors
pub fn load_samples<P: AsRef<Path>>(path: P) -> IoResult<Vec<Sample>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let samples = read_samples(BufReader::new(file))?;
    debug!(path = %path.display(), count = samples.len(), "Loaded samples");
    Ok(samples)
}
