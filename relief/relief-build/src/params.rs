//! Mesh building parameters.

use crate::error::{BuildError, BuildResult};

/// How side walls are generated when a base plate is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallMode {
    /// Wall the four edges of the grid rectangle only.
    ///
    /// Holes inside the grid are left open, so a grid with interior holes
    /// produces a mesh with boundary edges around each hole.
    #[default]
    Perimeter,

    /// Wall every boundary loop of the top surface, including loops around
    /// interior holes.
    ///
    /// Closes the solid for any hole layout.
    Boundary,
}

/// Parameters for turning a height grid into a solid.
///
/// # Example
///
/// ```
/// use relief_build::{MeshParams, WallMode};
///
/// let params = MeshParams::default().with_xy_scale(5.0).with_walls(WallMode::Boundary);
/// assert!(params.add_base);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeshParams {
    /// Horizontal scale in millimeters per degree.
    ///
    /// Default: `2.0`
    pub xy_scale: f64,

    /// Add a flat base plate at `z = 0` plus side walls, closing the solid.
    ///
    /// Default: `true`
    pub add_base: bool,

    /// Side-wall strategy when `add_base` is set.
    ///
    /// Default: [`WallMode::Perimeter`]
    pub walls: WallMode,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            xy_scale: 2.0,
            add_base: true,
            walls: WallMode::Perimeter,
        }
    }
}

impl MeshParams {
    /// Top surface only, no base plate or walls.
    #[must_use]
    pub fn surface_only() -> Self {
        Self {
            add_base: false,
            ..Default::default()
        }
    }

    /// Set the horizontal scale.
    #[must_use]
    pub const fn with_xy_scale(mut self, xy_scale: f64) -> Self {
        self.xy_scale = xy_scale;
        self
    }

    /// Enable or disable the base plate.
    #[must_use]
    pub const fn with_base(mut self, add_base: bool) -> Self {
        self.add_base = add_base;
        self
    }

    /// Set the side-wall strategy.
    #[must_use]
    pub const fn with_walls(mut self, walls: WallMode) -> Self {
        self.walls = walls;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidScale`] if `xy_scale` is not finite and positive.
    pub fn validate(&self) -> BuildResult<()> {
        if self.xy_scale.is_finite() && self.xy_scale > 0.0 {
            Ok(())
        } else {
            Err(BuildError::InvalidScale {
                value: self.xy_scale,
            })
        }
    }
}
