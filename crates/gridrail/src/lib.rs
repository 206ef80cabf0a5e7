//! gridrail: railway networks on 3-D and 4-D tile grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridrail sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridrail::prelude::*;
//!
//! // Lay five straights heading +x, with +z as the "in" direction.
//! let mut graph = TrackGraph::new(TrackConfig { dim: 3, switch_seed: 0 }).unwrap();
//! graph.build(&[0, 0, 0], Dir(0), Dir(4), "sssss").unwrap();
//!
//! // Put a two-car train on the second segment and drive it forward.
//! let start = TrainStart {
//!     tile: graph.tile_at(&[2, 0, 0]).unwrap(),
//!     from_dir: Dir(1),
//!     offset: 0.5,
//! };
//! let config = TrainConfig {
//!     tier: PlacementTier::SquarePositions,
//!     ..TrainConfig::default()
//! };
//! let mut train = Train::new(&mut graph, vec![Car::new(); 2], &config, start).unwrap();
//! assert!(train.move_forward(&mut graph, 2.0, SwitchChoice::First));
//! assert_eq!(train.vehicles()[0].pose().pos.as_slice(), &[4.5, 0.5, 0.5]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridrail-core` | Directions, coordinates, ids, cell queries |
//! | [`track`] | `gridrail-track` | Tile graph and build grammar |
//! | [`path`] | `gridrail-path` | Segment geometry and continuous paths |
//! | [`train`] | `gridrail-train` | Vehicles and trains |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Directions, coordinates, ids and cell queries (`gridrail-core`).
///
/// Free-moving bodies use [`types::grid::is_open_move`] with any
/// [`types::OccupancyMap`], including a [`track::TrackGraph`].
pub use gridrail_core as types;

/// Tile graph, segments, switches and the build grammar (`gridrail-track`).
pub use gridrail_track as track;

/// Segment geometry and continuous paths (`gridrail-path`).
pub use gridrail_path as path;

/// Vehicles and trains (`gridrail-train`).
pub use gridrail_train as train;

/// Common imports for typical gridrail usage.
///
/// ```rust
/// use gridrail::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridrail_core::{Coord, Dir, HintId, OccupancyMap, TileId, WorldPos};

    // Track
    pub use gridrail_track::{Segment, SwitchChoice, TrackConfig, TrackError, TrackGraph};

    // Path
    pub use gridrail_path::{ContinuousPath, GeometryConfig, PathDetail, PathError, PathInfo};

    // Train
    pub use gridrail_train::{Car, PlacementTier, Train, TrainConfig, TrainError, TrainStart, Vehicle};
}
