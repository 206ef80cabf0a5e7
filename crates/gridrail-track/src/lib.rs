//! Sparse track graph for gridrail networks.
//!
//! A [`TrackGraph`] is an arena of [`Tile`]s keyed by integer position.
//! Each tile holds the rail [`Segment`]s passing through it and a lazily
//! filled table of neighbor links, so closed loops never form ownership
//! cycles. Track is authored with a one-character-per-step command
//! grammar through [`TrackGraph::build`].
//!
//! # Example
//!
//! ```
//! use gridrail_core::Dir;
//! use gridrail_track::{TrackConfig, TrackGraph};
//!
//! let mut graph = TrackGraph::new(TrackConfig { dim: 3, switch_seed: 0 }).unwrap();
//! let cursor = graph.build(&[0, 0, 0], Dir(0), Dir(4), "ssss").unwrap();
//! assert_eq!(cursor.pos.as_slice(), &[4, 0, 0]);
//! assert_eq!(graph.tile_count(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod build;
pub mod config;
pub mod error;
pub mod graph;
pub mod segment;
pub mod tile;

pub use build::{Command, Cursor};
pub use config::TrackConfig;
pub use error::TrackError;
pub use graph::{SwitchChoice, TrackGraph};
pub use segment::Segment;
pub use tile::Tile;
