//! Error type for track authoring and graph mutation.

use std::error::Error;
use std::fmt;

use gridrail_core::{Coord, Dir};

/// Errors reported while building or editing a [`TrackGraph`](crate::TrackGraph).
///
/// All of these are authoring mistakes: the graph never enters an
/// invalid state because of them, but a [`build`](crate::TrackGraph::build)
/// that fails on its N-th command keeps the tiles and segments laid by
/// the commands before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackError {
    /// A command string contains a character outside the grammar.
    InvalidCommand {
        /// The offending character.
        command: char,
        /// Character index within the command string.
        index: usize,
    },
    /// A segment cannot coexist with the segments already on its tile.
    IncompatibleSegment {
        /// Position of the tile that rejected the segment.
        pos: Coord,
        /// Which rule was violated.
        reason: String,
    },
    /// A segment's endpoints do not describe a traversable rail.
    InvalidSegment {
        /// First endpoint.
        from: Dir,
        /// Second endpoint.
        to: Dir,
        /// Which rule was violated.
        reason: &'static str,
    },
    /// The build cursor's heading or "in" direction is unusable.
    InvalidCursor {
        /// Heading.
        dir1: Dir,
        /// "In" direction.
        dir2: Dir,
    },
    /// A position has the wrong number of components for the graph.
    DimensionMismatch {
        /// Graph dimension.
        expected: usize,
        /// Components supplied.
        got: usize,
    },
    /// Track graphs support 3-D and 4-D grids only.
    InvalidDimension {
        /// The rejected dimension.
        dim: usize,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCommand { command, index } => {
                write!(f, "invalid track command {command:?} at index {index}")
            }
            Self::IncompatibleSegment { pos, reason } => {
                write!(f, "incompatible segment at {pos:?}: {reason}")
            }
            Self::InvalidSegment { from, to, reason } => {
                write!(f, "invalid segment {from}..{to}: {reason}")
            }
            Self::InvalidCursor { dir1, dir2 } => {
                write!(f, "invalid build cursor: heading {dir1}, in {dir2}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected} coordinates, got {got}")
            }
            Self::InvalidDimension { dim } => {
                write!(f, "track dimension must be 3 or 4, got {dim}")
            }
        }
    }
}

impl Error for TrackError {}
