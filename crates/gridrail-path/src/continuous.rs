//! A sliding window of path segments for one train.

use std::collections::VecDeque;

use gridrail_core::{Dir, TileId};
use gridrail_track::{SwitchChoice, TrackGraph};

use crate::detail::PathDetail;
use crate::error::PathError;
use crate::iter::{PathIter, Walk};
use crate::path_seg::PathSeg;

/// The materialized stretch of track between a train's head and tail.
///
/// Segments are ordered from the head (index 0) to the tail. `head` is
/// an offset from the entry of the first segment and `tail` an offset
/// from the entry of the last; both always lie within their segment.
/// The window grows at whichever end is moving and is trimmed again by
/// [`PathIter::prune`] after vehicles are placed.
#[derive(Clone, Debug)]
pub struct ContinuousPath {
    segs: VecDeque<PathSeg>,
    head: f64,
    tail: f64,
    detail: PathDetail,
}

impl ContinuousPath {
    /// A one-segment path on `tile`, entered through `from_dir`, with both
    /// ends at `offset` (clamped to the segment).
    pub fn new(
        graph: &mut TrackGraph,
        detail: PathDetail,
        tile: TileId,
        from_dir: Dir,
        offset: f64,
    ) -> Result<Self, PathError> {
        let seg = graph
            .select_segment(tile, from_dir, SwitchChoice::First)
            .and_then(|s| PathSeg::enter(graph, tile, s, from_dir, 0))
            .ok_or(PathError::NoStartingSegment { tile, from_dir })?;
        let offset = offset.clamp(0.0, detail.len(&seg));
        Ok(Self {
            segs: VecDeque::from([seg]),
            head: offset,
            tail: offset,
            detail,
        })
    }

    /// Geometry strategy.
    pub fn detail(&self) -> &PathDetail {
        &self.detail
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> &VecDeque<PathSeg> {
        &self.segs
    }

    /// Number of materialized segments.
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Always `false`: a path holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Head offset into the first segment.
    pub fn head(&self) -> f64 {
        self.head
    }

    /// Tail offset into the last segment.
    pub fn tail(&self) -> f64 {
        self.tail
    }

    /// Move the head forward by `delta`, growing the front as needed.
    ///
    /// Returns `false` at a dead end, with the head clamped to the end
    /// of the last reachable segment. A negative or non-finite `delta`
    /// moves nothing and also returns `false`.
    pub fn move_forward(&mut self, graph: &mut TrackGraph, delta: f64, choice: SwitchChoice) -> bool {
        if !is_valid_delta(delta) {
            return false;
        }
        self.head += delta;
        loop {
            let len = self.detail.len(&self.segs[0]);
            if self.head <= len {
                return true;
            }
            if !self.grow_front(graph, choice) {
                self.head = len;
                return false;
            }
            self.head -= len;
        }
    }

    /// Move the tail backward by `delta`, growing the back as needed.
    ///
    /// Returns `false` at a dead end, with the tail clamped to the start
    /// of the last reachable segment. A negative or non-finite `delta`
    /// moves nothing and also returns `false`.
    pub fn move_reverse(&mut self, graph: &mut TrackGraph, delta: f64, choice: SwitchChoice) -> bool {
        if !is_valid_delta(delta) {
            return false;
        }
        self.tail -= delta;
        while self.tail < 0.0 {
            if !self.grow_back(graph, choice) {
                self.tail = 0.0;
                return false;
            }
            self.tail += self.detail.len(self.back());
        }
        true
    }

    /// Walk from the head towards the tail, growing the back of the path
    /// if the walk runs past it. Used once, to place a new train.
    pub fn initial_iter<'a>(&'a mut self, graph: &'a mut TrackGraph) -> PathIter<'a> {
        let head = self.head;
        PathIter::new(self, Some(graph), Walk::TowardTail, 0, head)
    }

    /// Walk from the head towards the tail over materialized segments.
    pub fn head_to_tail_iter(&mut self) -> PathIter<'_> {
        let head = self.head;
        PathIter::new(self, None, Walk::TowardTail, 0, head)
    }

    /// Walk from the tail towards the head over materialized segments.
    pub fn tail_to_head_iter(&mut self) -> PathIter<'_> {
        let (last, tail) = (self.segs.len() - 1, self.tail);
        PathIter::new(self, None, Walk::TowardHead, last, tail)
    }

    fn back(&self) -> &PathSeg {
        &self.segs[self.segs.len() - 1]
    }

    /// Append the segment beyond the front's exit face.
    pub(crate) fn grow_front(&mut self, graph: &mut TrackGraph, choice: SwitchChoice) -> bool {
        let front = &self.segs[0];
        let Some(hbase) = front.exit_hbase() else {
            log::warn!(
                "tile {}: no helix transition from {} to {}",
                front.tile,
                front.heading_in(),
                front.to_dir
            );
            return false;
        };
        let (from_tile, exit) = (front.tile, front.to_dir);
        let tile = graph.neighbor_or_grow(from_tile, exit);
        let entry = exit.opposite();
        let next = graph
            .select_segment(tile, entry, choice)
            .and_then(|s| PathSeg::enter(graph, tile, s, entry, hbase));
        match next {
            Some(seg) => {
                log::trace!("grew front into tile {tile} at {:?}", seg.pos);
                self.segs.push_front(seg);
                true
            }
            None => {
                log::debug!("dead end ahead of tile {from_tile} towards {exit}");
                false
            }
        }
    }

    /// Prepend the segment behind the back's entry face.
    pub(crate) fn grow_back(&mut self, graph: &mut TrackGraph, choice: SwitchChoice) -> bool {
        let back = self.back();
        let (from_tile, entry_face, back_hbase) = (back.tile, back.from_dir, back.hbase);
        let tile = graph.neighbor_or_grow(from_tile, entry_face);
        // The new segment exits towards `back`, so it is found by entering
        // from that side and then flipped.
        let exit = entry_face.opposite();
        let Some(segment) = graph.select_segment(tile, exit, choice) else {
            log::debug!("dead end behind tile {from_tile} towards {entry_face}");
            return false;
        };
        let Some(entry) = segment.exit_for(exit) else {
            return false;
        };
        let Some(mut seg) = PathSeg::enter(graph, tile, segment, entry, 0) else {
            return false;
        };
        match seg.hbase_for_exit(back_hbase) {
            Some(hbase) => seg.hbase = hbase,
            None => {
                log::warn!(
                    "tile {tile}: no helix transition from {} to {}",
                    seg.heading_in(),
                    seg.to_dir
                );
                return false;
            }
        }
        log::trace!("grew back into tile {tile} at {:?}", seg.pos);
        self.segs.push_back(seg);
        true
    }

    pub(crate) fn seg(&self, index: usize) -> &PathSeg {
        &self.segs[index]
    }

    pub(crate) fn seg_len(&self, index: usize) -> f64 {
        self.detail.len(&self.segs[index])
    }

    pub(crate) fn truncate_back(&mut self, keep: usize, tail: f64) {
        self.segs.truncate(keep);
        self.tail = tail;
    }

    pub(crate) fn drain_front(&mut self, drop: usize, head: f64) {
        self.segs.drain(..drop);
        self.head = head;
    }
}

fn is_valid_delta(delta: f64) -> bool {
    let valid = delta.is_finite() && delta >= 0.0;
    if !valid {
        log::warn!("ignoring path move of {delta}");
    }
    valid
}
