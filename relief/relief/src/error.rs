//! Umbrella error type.

use relief_build::BuildError;
use relief_field::FieldError;
use relief_grid::GridError;
use relief_io::IoError;
use thiserror::Error;

/// Result type for end-to-end relief operations.
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Any error from the relief pipeline, tagged by stage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReliefError {
    /// Lattice reconstruction or cropping failed.
    #[error("grid: {0}")]
    Grid(#[from] GridError),

    /// Height transformation failed.
    #[error("field: {0}")]
    Field(#[from] FieldError),

    /// Mesh building failed.
    #[error("build: {0}")]
    Build(#[from] BuildError),

    /// Reading input or writing output failed.
    #[error("io: {0}")]
    Io(#[from] IoError),
}

impl From<std::io::Error> for ReliefError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Io(err))
    }
}

impl ReliefError {
    /// The samples do not form a complete rectangular lattice.
    #[must_use]
    pub const fn is_lattice_error(&self) -> bool {
        matches!(self, Self::Grid(e) if e.is_lattice_error())
    }

    /// A crop window matched no cells.
    #[must_use]
    pub const fn is_empty_region(&self) -> bool {
        matches!(self, Self::Grid(GridError::EmptyRegion { .. }))
    }

    /// A raw value lies outside the domain of the log transform.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::Field(FieldError::Domain { .. }))
    }

    /// All finite values are equal, so normalization is undefined.
    #[must_use]
    pub const fn is_degenerate_range(&self) -> bool {
        matches!(self, Self::Field(FieldError::DegenerateRange { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_stage_errors() {
        let err: ReliefError = GridError::EmptyRegion {
            lon_min: 0.0,
            lon_max: 1.0,
            lat_min: 0.0,
            lat_max: 1.0,
        }
        .into();
        assert!(err.is_empty_region());
        assert!(!err.is_lattice_error());

        let err: ReliefError = GridError::LatticeIncomplete {
            rows: 2,
            cols: 2,
            expected: 4,
            actual: 3,
        }
        .into();
        assert!(err.is_lattice_error());

        let err: ReliefError = FieldError::DegenerateRange { value: 1.0 }.into();
        assert!(err.is_degenerate_range());
        assert!(!err.is_domain_error());
    }

    #[test]
    fn io_errors_wrap() {
        let err: ReliefError = std::io::Error::other("disk full").into();
        assert!(matches!(err, ReliefError::Io(IoError::Io(_))));
        assert!(err.to_string().contains("disk full"));
    }
}
