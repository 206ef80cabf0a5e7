//! Train configuration and validation.

use std::error::Error;
use std::fmt;

use gridrail_path::{GeometryConfig, PathDetail, PathError};

// ── PlacementTier ──────────────────────────────────────────────────

/// Level of detail used to place vehicles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlacementTier {
    /// Square geometry, positions only.
    SquarePositions,
    /// Round geometry, positions only.
    RoundPositions,
    /// Round geometry with full orientation.
    #[default]
    RoundOriented,
}

impl PlacementTier {
    /// Whether vehicles receive orientation along with position.
    pub fn orients(self) -> bool {
        self == Self::RoundOriented
    }

    /// Build the matching path geometry.
    pub fn detail(self, geometry: &GeometryConfig) -> Result<PathDetail, PathError> {
        match self {
            Self::SquarePositions => geometry.square(),
            Self::RoundPositions | Self::RoundOriented => geometry.round(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TrainConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Car length is NaN, infinite, zero, or negative.
    InvalidCarLength {
        /// The invalid value.
        value: f64,
    },
    /// Car scale is NaN, infinite, zero, or negative.
    InvalidCarScale {
        /// The invalid value.
        value: f64,
    },
    /// Gap is NaN, infinite, or negative.
    InvalidGap {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCarLength { value } => {
                write!(f, "car_length must be finite and positive, got {value}")
            }
            Self::InvalidCarScale { value } => {
                write!(f, "car_scale must be finite and positive, got {value}")
            }
            Self::InvalidGap { value } => {
                write!(f, "gap must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── TrainConfig ────────────────────────────────────────────────────

/// Parameters shared by every vehicle of a [`Train`](crate::Train).
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Length each vehicle is scaled to, in tile units. Default: 0.9.
    pub car_length: f64,
    /// Model scale passed to each vehicle. Default: 1.0.
    pub car_scale: f64,
    /// Space between consecutive vehicles. Default: 0.1.
    pub gap: f64,
    /// Level of detail. Default: [`PlacementTier::RoundOriented`].
    pub tier: PlacementTier,
    /// Path geometry parameters.
    pub geometry: GeometryConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            car_length: 0.9,
            car_scale: 1.0,
            gap: 0.1,
            tier: PlacementTier::default(),
            geometry: GeometryConfig::default(),
        }
    }
}

impl TrainConfig {
    /// Check the vehicle parameters. Geometry is checked when the
    /// path is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.car_length.is_finite() && self.car_length > 0.0) {
            return Err(ConfigError::InvalidCarLength {
                value: self.car_length,
            });
        }
        if !(self.car_scale.is_finite() && self.car_scale > 0.0) {
            return Err(ConfigError::InvalidCarScale {
                value: self.car_scale,
            });
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(ConfigError::InvalidGap { value: self.gap });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad_length = TrainConfig {
            car_length: 0.0,
            ..TrainConfig::default()
        };
        assert!(matches!(
            bad_length.validate(),
            Err(ConfigError::InvalidCarLength { .. })
        ));
        let bad_scale = TrainConfig {
            car_scale: f64::NAN,
            ..TrainConfig::default()
        };
        assert!(matches!(
            bad_scale.validate(),
            Err(ConfigError::InvalidCarScale { .. })
        ));
        let bad_gap = TrainConfig {
            gap: -0.5,
            ..TrainConfig::default()
        };
        assert_eq!(
            bad_gap.validate(),
            Err(ConfigError::InvalidGap { value: -0.5 })
        );
    }

    #[test]
    fn tier_selects_geometry() {
        let g = GeometryConfig::default();
        assert!(matches!(
            PlacementTier::SquarePositions.detail(&g),
            Ok(PathDetail::Square(_))
        ));
        assert!(matches!(
            PlacementTier::RoundPositions.detail(&g),
            Ok(PathDetail::Round(_))
        ));
        assert!(PlacementTier::RoundOriented.orients());
        assert!(!PlacementTier::RoundPositions.orients());
    }
}
