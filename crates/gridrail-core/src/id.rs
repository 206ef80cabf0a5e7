//! Strongly-typed identifiers and the [`Coord`] / [`WorldPos`] aliases.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a tile within a track graph.
///
/// Tiles are allocated sequentially as the graph grows and are never
/// removed, so `TileId(n)` stays valid for the life of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl TileId {
    /// Arena index of this tile.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque rendering hint attached to a tile.
///
/// The track core only stores and forwards it (through
/// `PathInfo::hint`); its meaning belongs to the platform/ramp geometry
/// builders that set it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HintId(pub u32);

impl fmt::Display for HintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HintId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An integer grid position.
///
/// Uses `SmallVec<[i32; 4]>` so 3-D and 4-D positions never allocate.
pub type Coord = SmallVec<[i32; 4]>;

/// A real-valued world-space position, one component per axis.
pub type WorldPos = SmallVec<[f64; 4]>;
