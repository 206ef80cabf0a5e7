//! Walking a [`ContinuousPath`] to place vehicles.

use gridrail_track::{SwitchChoice, TrackGraph};

use crate::continuous::ContinuousPath;
use crate::detail::PathInfo;

/// Slack absorbed when a walk lands exactly on the end of the window.
const EPS: f64 = 1e-9;

/// Which way a [`PathIter`] walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// From the head towards the tail (increasing segment index).
    TowardTail,
    /// From the tail towards the head (decreasing segment index).
    TowardHead,
}

/// A cursor over a [`ContinuousPath`].
///
/// Created by [`ContinuousPath::initial_iter`],
/// [`ContinuousPath::head_to_tail_iter`] and
/// [`ContinuousPath::tail_to_head_iter`]. Only the initial iterator may
/// grow the path; the others panic if asked to walk off the window, since
/// a placed train always fits inside it.
pub struct PathIter<'a> {
    path: &'a mut ContinuousPath,
    graph: Option<&'a mut TrackGraph>,
    walk: Walk,
    index: usize,
    offset: f64,
    shortfall: f64,
}

impl<'a> PathIter<'a> {
    pub(crate) fn new(
        path: &'a mut ContinuousPath,
        graph: Option<&'a mut TrackGraph>,
        walk: Walk,
        index: usize,
        offset: f64,
    ) -> Self {
        Self {
            path,
            graph,
            walk,
            index,
            offset,
            shortfall: 0.0,
        }
    }

    /// Direction of travel.
    pub fn walk(&self) -> Walk {
        self.walk
    }

    /// Index of the current segment.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset into the current segment.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Total distance requested past a dead end so far.
    pub fn shortfall(&self) -> f64 {
        self.shortfall
    }

    /// Advance `dist` along the walk.
    ///
    /// Returns `false` if the initial iterator hit a dead end; the
    /// cursor is then clamped to the end of the track.
    ///
    /// # Panics
    ///
    /// If a non-growing iterator walks past the materialized window.
    pub fn step(&mut self, dist: f64) -> bool {
        match self.walk {
            Walk::TowardTail => self.step_toward_tail(dist),
            Walk::TowardHead => self.step_toward_head(dist),
        }
    }

    fn step_toward_tail(&mut self, dist: f64) -> bool {
        self.offset -= dist;
        while self.offset < -EPS {
            if self.index + 1 >= self.path.len() {
                let grown = match self.graph.as_deref_mut() {
                    Some(graph) => self.path.grow_back(graph, SwitchChoice::First),
                    None => panic!("path walk ran past the tail"),
                };
                if !grown {
                    self.shortfall -= self.offset;
                    self.offset = 0.0;
                    return false;
                }
            }
            self.index += 1;
            self.offset += self.path.seg_len(self.index);
        }
        self.offset = self.offset.max(0.0);
        true
    }

    fn step_toward_head(&mut self, dist: f64) -> bool {
        self.offset += dist;
        loop {
            let len = self.path.seg_len(self.index);
            if self.offset <= len + EPS {
                self.offset = self.offset.min(len);
                return true;
            }
            if self.index == 0 {
                let grown = match self.graph.as_deref_mut() {
                    Some(graph) => self.path.grow_front(graph, SwitchChoice::First),
                    None => panic!("path walk ran past the head"),
                };
                if !grown {
                    self.shortfall += self.offset - len;
                    self.offset = len;
                    return false;
                }
                // The old front moved to index 1; stay on the new front.
            } else {
                self.index -= 1;
            }
            self.offset -= len;
        }
    }

    /// Pose at the cursor.
    pub fn pose(&self, info: &mut PathInfo) {
        let seg = self.path.seg(self.index);
        self.path.detail().pos(seg, self.offset, info);
    }

    /// Drop every segment past the cursor and make the cursor the new
    /// end of the path: the tail for a walk towards the tail, the head for
    /// a walk towards the head.
    pub fn prune(self) {
        match self.walk {
            Walk::TowardTail => self.path.truncate_back(self.index + 1, self.offset),
            Walk::TowardHead => self.path.drain_front(self.index, self.offset),
        }
    }
}
