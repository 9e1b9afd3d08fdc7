//! Scattered geographic samples.

/// One scalar sample at a geographic coordinate.
///
/// `value` may be NaN to mark a lattice point with no data; coordinates
/// must be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Scalar field value.
    pub value: f64,
}

impl Sample {
    /// Create a sample.
    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, value: f64) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// Returns `true` when both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn has_finite_coords(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64, f64)> for Sample {
    fn from((latitude, longitude, value): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, value)
    }
}
