//! Height transformation parameters.

use crate::error::{FieldError, FieldResult};

/// Parameters controlling how raw field values become printable heights.
///
/// All lengths are in millimeters.
///
/// # Example
///
/// ```
/// use relief_field::FieldParams;
///
/// let params = FieldParams::default()
///     .with_max_height(120.0)
///     .with_smooth_passes(4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldParams {
    /// Height of the lowest point above the base plate.
    ///
    /// Keeps valleys from printing paper-thin. Default: `2.0`
    pub base_thickness: f64,

    /// Height added for a normalized value of 1.0.
    ///
    /// Default: `50.0`
    pub height_scale: f64,

    /// Hard cap on any height.
    ///
    /// Default: `150.0`
    pub max_height: f64,

    /// Number of 3x3 box-blur passes over the normalized field.
    ///
    /// `0` keeps the raw, spiky surface; `2` is moderate; `4` is very smooth.
    /// Default: `2`
    pub smooth_passes: u32,

    /// Percentile of finite heights above which peaks are damped.
    ///
    /// Default: `98.0`
    pub spike_percentile: f64,

    /// Factor applied to heights above the spike threshold, never pulling
    /// them below the threshold itself.
    ///
    /// Default: `0.95`
    pub spike_damping: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            base_thickness: 2.0,
            height_scale: 50.0,
            max_height: 150.0,
            smooth_passes: 2,
            spike_percentile: 98.0,
            spike_damping: 0.95,
        }
    }
}

impl FieldParams {
    /// No smoothing: every spike in the data survives.
    #[must_use]
    pub fn raw() -> Self {
        Self {
            smooth_passes: 0,
            ..Default::default()
        }
    }

    /// Two smoothing passes (the default).
    #[must_use]
    pub fn moderate() -> Self {
        Self::default()
    }

    /// Four smoothing passes, for small nozzles or fragile materials.
    #[must_use]
    pub fn very_smooth() -> Self {
        Self {
            smooth_passes: 4,
            ..Default::default()
        }
    }

    /// Set the base thickness.
    #[must_use]
    pub const fn with_base_thickness(mut self, base_thickness: f64) -> Self {
        self.base_thickness = base_thickness;
        self
    }

    /// Set the height scale.
    #[must_use]
    pub const fn with_height_scale(mut self, height_scale: f64) -> Self {
        self.height_scale = height_scale;
        self
    }

    /// Set the maximum height.
    #[must_use]
    pub const fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the number of smoothing passes.
    #[must_use]
    pub const fn with_smooth_passes(mut self, smooth_passes: u32) -> Self {
        self.smooth_passes = smooth_passes;
        self
    }

    /// Set the spike percentile and damping factor.
    #[must_use]
    pub const fn with_spike_damping(mut self, percentile: f64, damping: f64) -> Self {
        self.spike_percentile = percentile;
        self.spike_damping = damping;
        self
    }

    /// Check the parameters for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidParams`] if:
    /// - any length is not finite
    /// - `base_thickness` or `height_scale` is negative
    /// - `max_height < base_thickness`
    /// - `spike_percentile` is outside `[0, 100]`
    /// - `spike_damping` is outside `(0, 1]`
    pub fn validate(&self) -> FieldResult<()> {
        if !self.base_thickness.is_finite() || self.base_thickness < 0.0 {
            return Err(FieldError::invalid_params(format!(
                "base_thickness must be finite and non-negative, got {}",
                self.base_thickness
            )));
        }
        if !self.height_scale.is_finite() || self.height_scale < 0.0 {
            return Err(FieldError::invalid_params(format!(
                "height_scale must be finite and non-negative, got {}",
                self.height_scale
            )));
        }
        if !self.max_height.is_finite() || self.max_height < self.base_thickness {
            return Err(FieldError::invalid_params(format!(
                "max_height {} must be finite and at least base_thickness {}",
                self.max_height, self.base_thickness
            )));
        }
        if !(0.0..=100.0).contains(&self.spike_percentile) {
            return Err(FieldError::invalid_params(format!(
                "spike_percentile must be in [0, 100], got {}",
                self.spike_percentile
            )));
        }
        if !(self.spike_damping > 0.0 && self.spike_damping <= 1.0) {
            return Err(FieldError::invalid_params(format!(
                "spike_damping must be in (0, 1], got {}",
                self.spike_damping
            )));
        }
        Ok(())
    }
}
