//! Tiles: one grid cell's worth of track.

use gridrail_core::{Coord, Dir, HintId, TileId};
use smallvec::{smallvec, SmallVec};

use crate::error::TrackError;
use crate::segment::Segment;

/// A grid cell holding rail segments.
///
/// Neighbor links are filled lazily as track is laid and trains explore,
/// indexed by [`Dir::index`]. Two tiles are linked iff each names the
/// other across the shared face.
#[derive(Clone, Debug)]
pub struct Tile {
    pos: Coord,
    segments: SmallVec<[Segment; 4]>,
    neighbors: SmallVec<[Option<TileId>; 8]>,
    switch: Option<usize>,
    attached: bool,
    hint: Option<HintId>,
}

impl Tile {
    pub(crate) fn new(pos: Coord) -> Self {
        let faces = 2 * pos.len();
        Self {
            pos,
            segments: SmallVec::new(),
            neighbors: smallvec![None; faces],
            switch: None,
            attached: false,
            hint: None,
        }
    }

    /// Integer grid position.
    pub fn pos(&self) -> &[i32] {
        &self.pos
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Linked neighbor across face `dir`, if one has been discovered.
    pub fn neighbor(&self, dir: Dir) -> Option<TileId> {
        self.neighbors.get(dir.index()).copied().flatten()
    }

    /// Manually selected segment index, used where several segments
    /// share an entry face.
    pub fn switch(&self) -> Option<usize> {
        self.switch
    }

    /// Whether scenery is attached (platforms, buffers).
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Rendering hint forwarded to geometry output.
    pub fn hint(&self) -> Option<HintId> {
        self.hint
    }

    /// Whether any segment has an end on a vertical face.
    pub fn has_vertical(&self) -> bool {
        self.segments.iter().any(Segment::is_vertical)
    }

    /// Segments with an end on face `entry`.
    pub fn segments_entering(&self, entry: Dir) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.connects(entry))
    }

    /// Add `segment`, returning `false` when an identical one is present.
    ///
    /// Vertical and non-vertical segments never share a tile, and two
    /// segments on the same face pair must agree on their helix.
    pub(crate) fn add_segment(&mut self, segment: Segment) -> Result<bool, TrackError> {
        for existing in &self.segments {
            if existing.is_vertical() != segment.is_vertical() {
                return Err(self.incompatible("ramp and level track cannot share a tile"));
            }
            if existing.same_faces(&segment) {
                if existing.helix() == segment.helix() {
                    return Ok(false);
                }
                return Err(self.incompatible("conflicting helix on the same straight"));
            }
        }
        self.segments.push(segment);
        Ok(true)
    }

    pub(crate) fn link(&mut self, dir: Dir, to: TileId) {
        self.neighbors[dir.index()] = Some(to);
    }

    pub(crate) fn set_switch(&mut self, switch: Option<usize>) {
        self.switch = switch;
    }

    pub(crate) fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub(crate) fn set_hint(&mut self, hint: Option<HintId>) {
        self.hint = hint;
    }

    fn incompatible(&self, reason: &str) -> TrackError {
        TrackError::IncompatibleSegment {
            pos: self.pos.clone(),
            reason: reason.to_string(),
        }
    }
}
