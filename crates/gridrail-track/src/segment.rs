//! A single rail piece within a tile.

use gridrail_core::Dir;

use crate::error::TrackError;

/// A rail connecting two faces of one tile.
///
/// The pair is unordered: a train may enter through either face and
/// leave through the other. `helix` is a quarter-turn twist of the
/// sideways frame and is only meaningful on 4-D straights; its sign is
/// a property of the rail, not of the direction it is travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    from: Dir,
    to: Dir,
    helix: i8,
}

impl Segment {
    /// An untwisted segment between `from` and `to`.
    pub fn new(from: Dir, to: Dir) -> Result<Self, TrackError> {
        Self::with_helix(from, to, 0)
    }

    /// A segment with a helix twist of `helix` quarter turns (−1, 0, 1).
    pub fn with_helix(from: Dir, to: Dir, helix: i8) -> Result<Self, TrackError> {
        let invalid = |reason| TrackError::InvalidSegment { from, to, reason };
        if from == to {
            return Err(invalid("both ends on the same face"));
        }
        if from.is_vertical() && to.is_vertical() {
            return Err(invalid("vertical shafts are not traversable"));
        }
        if !(-1..=1).contains(&helix) {
            return Err(invalid("helix must be -1, 0 or 1"));
        }
        if helix != 0 && !from.is_opposite(to) {
            return Err(invalid("only straight segments can twist"));
        }
        Ok(Self { from, to, helix })
    }

    /// First endpoint, as authored.
    pub fn from_dir(&self) -> Dir {
        self.from
    }

    /// Second endpoint, as authored.
    pub fn to_dir(&self) -> Dir {
        self.to
    }

    /// Helix twist in quarter turns.
    pub fn helix(&self) -> i8 {
        self.helix
    }

    /// Whether the segment runs straight through the tile.
    pub fn is_straight(&self) -> bool {
        self.from.is_opposite(self.to)
    }

    /// Whether either end is on a vertical face (one half of a ramp).
    pub fn is_vertical(&self) -> bool {
        self.from.is_vertical() || self.to.is_vertical()
    }

    /// Lower half of a ramp: leaves through the top face.
    pub fn is_ramp_bottom(&self) -> bool {
        self.from == Dir::UP || self.to == Dir::UP
    }

    /// Upper half of a ramp: leaves through the bottom face.
    pub fn is_ramp_top(&self) -> bool {
        self.from == Dir::DOWN || self.to == Dir::DOWN
    }

    /// Whether the segment has an end on face `dir`.
    pub fn connects(&self, dir: Dir) -> bool {
        self.from == dir || self.to == dir
    }

    /// The end opposite `entry`, if the segment touches `entry`.
    pub fn exit_for(&self, entry: Dir) -> Option<Dir> {
        if entry == self.from {
            Some(self.to)
        } else if entry == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Whether both segments join the same pair of faces.
    pub fn same_faces(&self, other: &Segment) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PX: Dir = Dir(0);
    const NX: Dir = Dir(1);
    const PZ: Dir = Dir(4);

    #[test]
    fn classification() {
        let straight = Segment::new(NX, PX).unwrap();
        assert!(straight.is_straight());
        assert!(!straight.is_vertical());

        let curve = Segment::new(NX, PZ).unwrap();
        assert!(!curve.is_straight());

        let bottom = Segment::new(NX, Dir::UP).unwrap();
        assert!(bottom.is_vertical());
        assert!(bottom.is_ramp_bottom());
        assert!(!bottom.is_ramp_top());

        let top = Segment::new(Dir::DOWN, PX).unwrap();
        assert!(top.is_ramp_top());
    }

    #[test]
    fn rejects_degenerate_pairs() {
        assert!(matches!(
            Segment::new(PX, PX),
            Err(TrackError::InvalidSegment { .. })
        ));
        assert!(Segment::new(Dir::UP, Dir::DOWN).is_err());
        assert!(Segment::with_helix(NX, PZ, 1).is_err());
        assert!(Segment::with_helix(NX, PX, 2).is_err());
        assert!(Segment::with_helix(NX, PX, -1).is_ok());
    }

    #[test]
    fn exit_for_either_end() {
        let s = Segment::new(NX, PZ).unwrap();
        assert_eq!(s.exit_for(NX), Some(PZ));
        assert_eq!(s.exit_for(PZ), Some(NX));
        assert_eq!(s.exit_for(PX), None);
        assert!(s.same_faces(&Segment::new(PZ, NX).unwrap()));
    }
}
