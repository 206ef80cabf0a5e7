//! Geometry parameters shared by both levels of detail.

use crate::detail::{PathDetail, RoundDetail, SquareDetail};
use crate::error::PathError;

/// Geometry parameters for [`PathDetail`] construction.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryConfig {
    /// Straight run at each end of a rounded curve, in `[0, 0.5)`.
    /// Default: 0.1.
    pub margin: f64,
    /// Stretch applied to the vertical world axis. Default: 1.0.
    pub vertical_scale: f64,
    /// Ramp incline in degrees, in `(0, 90]`. Default: 60.
    pub vertical_angle_deg: f64,
    /// Radius of the arc easing onto a ramp incline. Default: 0.2.
    pub vertical_radius: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            margin: 0.1,
            vertical_scale: 1.0,
            vertical_angle_deg: 60.0,
            vertical_radius: 0.2,
        }
    }
}

impl GeometryConfig {
    /// Check that the round profile is feasible.
    pub fn validate(&self) -> Result<(), PathError> {
        self.round().map(|_| ())
    }

    /// Square-detail geometry.
    pub fn square(&self) -> Result<PathDetail, PathError> {
        SquareDetail::new(self.vertical_scale).map(PathDetail::Square)
    }

    /// Round-detail geometry.
    pub fn round(&self) -> Result<PathDetail, PathError> {
        RoundDetail::new(
            self.margin,
            self.vertical_scale,
            self.vertical_angle_deg,
            self.vertical_radius,
        )
        .map(PathDetail::Round)
    }
}
