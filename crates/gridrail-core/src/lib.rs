//! Core types for gridrail track networks.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the axis-signed [`Dir`] encoding, the integer [`Coord`] and real
//! [`WorldPos`] vector types, tile/hint identifiers, and the
//! [`grid`] module of cell-boundary queries used for free movement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod grid;
pub mod id;

pub use direction::Dir;
pub use grid::{CellLookup, OccupancyMap};
pub use id::{Coord, HintId, TileId, WorldPos};
