//! Error types for path construction.

use std::error::Error;
use std::fmt;

use gridrail_core::{Dir, TileId};

/// Which geometry parameter check failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryConstraint {
    /// Curve margin outside `[0, 0.5)`.
    Margin,
    /// Vertical scale not finite and positive.
    VerticalScale,
    /// Ramp angle outside `(0°, 90°]`.
    VerticalAngle,
    /// Ramp radius not finite and positive.
    VerticalRadius,
    /// The incline alone overshoots the half tile horizontally.
    AngleTooShallow,
    /// The arc climbs the whole half-span, leaving no incline.
    RadiusTooTall,
    /// The arc and incline overshoot the half tile, leaving no flat.
    RadiusTooWide,
}

impl fmt::Display for GeometryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Margin => "margin",
            Self::VerticalScale => "vertical scale",
            Self::VerticalAngle => "vertical angle",
            Self::VerticalRadius => "vertical radius",
            Self::AngleTooShallow => "vertical angle too shallow",
            Self::RadiusTooTall => "vertical radius too large vertically",
            Self::RadiusTooWide => "vertical radius too large horizontally",
        };
        f.write_str(s)
    }
}

/// Errors from geometry setup and path construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// Geometry parameters cannot produce a valid profile.
    GeometryInfeasible {
        /// The violated constraint.
        constraint: GeometryConstraint,
        /// Offending values.
        reason: String,
    },
    /// The starting tile has no segment entered through the given face.
    NoStartingSegment {
        /// Starting tile.
        tile: TileId,
        /// Requested entry face.
        from_dir: Dir,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometryInfeasible { constraint, reason } => {
                write!(f, "infeasible geometry ({constraint}): {reason}")
            }
            Self::NoStartingSegment { tile, from_dir } => {
                write!(f, "tile {tile} has no segment entered from {from_dir}")
            }
        }
    }
}

impl Error for PathError {}
