//! Trains for gridrail networks.
//!
//! A [`Train`] owns a list of [`Vehicle`]s and a
//! [`ContinuousPath`](gridrail_path::ContinuousPath) spanning them. Moving
//! the train slides the path window along the track and re-places every
//! vehicle at a fixed spacing behind (or ahead of) the leading one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod train;
pub mod vehicle;

pub use config::{ConfigError, PlacementTier, TrainConfig};
pub use error::TrainError;
pub use train::{Train, TrainStart};
pub use vehicle::{Car, Vehicle};
