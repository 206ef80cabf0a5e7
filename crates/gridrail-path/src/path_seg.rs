//! Oriented segment traversals and the implicit-helix table.

use gridrail_core::{Coord, Dir, HintId, TileId};
use gridrail_track::{Segment, TrackGraph};

const S: u8 = u8::MAX;

/// Quarter turns the sideways frame gains through a turn, indexed by
/// `[heading_in][heading_out]`.
///
/// Rows and columns follow [`Dir`] order (+x, −x, +y, −y, +z, −z, +w,
/// −w). `S` marks U-turns and vertical-to-vertical transitions.
const HELIX_TURN: [[u8; 8]; 8] = [
    [0, S, 0, 0, 0, 0, 2, 0],
    [S, 0, 0, 0, 0, 0, 0, 2],
    [0, 0, S, S, 0, 0, 0, 0],
    [0, 0, S, S, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, S, 3, 3],
    [0, 0, 0, 0, S, 0, 1, 1],
    [2, 0, 0, 0, 1, 3, 0, S],
    [0, 2, 0, 0, 1, 3, S, 0],
];

/// Implicit helix change through a turn from `heading_in` to
/// `heading_out`, or `None` for a transition no track can make.
pub fn helix_turn(heading_in: Dir, heading_out: Dir) -> Option<u8> {
    HELIX_TURN
        .get(heading_in.index())
        .and_then(|row| row.get(heading_out.index()))
        .copied()
        .filter(|&m| m != S)
}

/// One [`Segment`] as traversed by a path: entered through `from_dir`,
/// left through `to_dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSeg {
    /// Tile the segment lies in.
    pub tile: TileId,
    /// Tile position.
    pub pos: Coord,
    /// Entry face.
    pub from_dir: Dir,
    /// Exit face.
    pub to_dir: Dir,
    /// The segment's own helix twist.
    pub helix: i8,
    /// Helix orientation at the entry face, in quarter turns mod 4.
    pub hbase: u8,
    /// Tile rendering hint.
    pub hint: Option<HintId>,
}

impl PathSeg {
    /// Orient `segment` in `tile` so that it is entered through `entry`.
    ///
    /// Returns `None` if the segment does not touch `entry`.
    pub fn enter(
        graph: &TrackGraph,
        tile: TileId,
        segment: Segment,
        entry: Dir,
        hbase: u8,
    ) -> Option<PathSeg> {
        let exit = segment.exit_for(entry)?;
        let t = graph.tile(tile);
        Some(PathSeg {
            tile,
            pos: Coord::from_slice(t.pos()),
            from_dir: entry,
            to_dir: exit,
            helix: segment.helix(),
            hbase: hbase % 4,
            hint: t.hint(),
        })
    }

    /// Travel direction on entry.
    pub fn heading_in(&self) -> Dir {
        self.from_dir.opposite()
    }

    /// Whether the traversal is a straight run.
    pub fn is_straight(&self) -> bool {
        self.from_dir.is_opposite(self.to_dir)
    }

    /// Whether either face is vertical.
    pub fn is_vertical(&self) -> bool {
        self.from_dir.is_vertical() || self.to_dir.is_vertical()
    }

    /// Helix orientation at the exit face, or `None` if the turn is not
    /// in the helix table.
    pub fn exit_hbase(&self) -> Option<u8> {
        let turn = helix_turn(self.heading_in(), self.to_dir)?;
        Some(wrap(i32::from(self.hbase) + i32::from(self.helix) + i32::from(turn)))
    }

    /// Entry helix base a traversal must have to leave with `exit_hbase`.
    pub fn hbase_for_exit(&self, exit_hbase: u8) -> Option<u8> {
        let turn = helix_turn(self.heading_in(), self.to_dir)?;
        Some(wrap(
            i32::from(exit_hbase) - i32::from(self.helix) - i32::from(turn),
        ))
    }
}

fn wrap(v: i32) -> u8 {
    v.rem_euclid(4) as u8
}
