//! Train construction errors.

use std::error::Error;
use std::fmt;

use gridrail_path::PathError;

use crate::config::ConfigError;

/// Errors from [`Train::new`](crate::Train::new).
#[derive(Debug, PartialEq)]
pub enum TrainError {
    /// The train configuration is invalid.
    Config(ConfigError),
    /// The path could not be built.
    Path(PathError),
    /// A train needs at least one vehicle.
    NoVehicles,
    /// The track cannot hold the whole train.
    TrackTooShort {
        /// How far the train overhung the dead end behind its start.
        shortfall: f64,
    },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Path(e) => write!(f, "path: {e}"),
            Self::NoVehicles => write!(f, "train has no vehicles"),
            Self::TrackTooShort { shortfall } => {
                write!(f, "track is {shortfall} too short for the train")
            }
        }
    }
}

impl Error for TrainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::NoVehicles | Self::TrackTooShort { .. } => None,
        }
    }
}

impl From<ConfigError> for TrainError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PathError> for TrainError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
