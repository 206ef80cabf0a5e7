//! Segment geometry strategies.
//!
//! Two levels of detail are provided. [`SquareDetail`] pivots corners at
//! the tile center and reports positions only. [`RoundDetail`] rounds
//! corners and ramps and reports full orientation. Both work in the
//! world frame where tile `p` spans `[p, p + 1]` on every axis and the
//! vertical axis is stretched by the vertical scale.

mod round;
mod square;

pub use round::RoundDetail;
pub use square::SquareDetail;

use gridrail_core::{Dir, HintId, WorldPos};
use smallvec::smallvec;

use crate::path_seg::PathSeg;

/// A pose along a path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathInfo {
    /// World position.
    pub pos: WorldPos,
    /// Heading at the start of the current turn or climb. Only
    /// meaningful when [`angle`](Self::angle) is non-zero.
    pub from_dir: Dir,
    /// Heading the turn or climb leads to.
    pub to_dir: Dir,
    /// Fraction of a quarter turn from `from_dir` towards `to_dir`, in
    /// `[0, 1]`.
    pub angle: f64,
    /// Roll about the heading in quarter turns; only meaningful mod 4.
    pub helix: f64,
    /// Rendering hint of the tile under the pose.
    pub hint: Option<HintId>,
}

impl Default for PathInfo {
    fn default() -> Self {
        Self {
            pos: WorldPos::new(),
            from_dir: Dir(0),
            to_dir: Dir(0),
            angle: 0.0,
            helix: 0.0,
            hint: None,
        }
    }
}

impl PathInfo {
    pub(crate) fn reset(&mut self, dim: usize) {
        self.pos.clear();
        self.pos.resize(dim, 0.0);
        self.from_dir = Dir(0);
        self.to_dir = Dir(0);
        self.angle = 0.0;
        self.helix = 0.0;
        self.hint = None;
    }
}

/// Geometry strategy for turning path offsets into poses.
#[derive(Clone, Debug, PartialEq)]
pub enum PathDetail {
    /// Corners pivot at the tile center; positions only.
    Square(SquareDetail),
    /// Rounded corners and ramps with orientation.
    Round(RoundDetail),
}

impl PathDetail {
    /// Arc length of `seg`.
    pub fn len(&self, seg: &PathSeg) -> f64 {
        match self {
            Self::Square(d) => d.len(seg),
            Self::Round(d) => d.len(seg),
        }
    }

    /// Pose at distance `d` from the entry of `seg`, written into `info`.
    ///
    /// `d` is clamped to `[0, len(seg)]`.
    pub fn pos(&self, seg: &PathSeg, d: f64, info: &mut PathInfo) {
        let d = d.clamp(0.0, self.len(seg));
        match self {
            Self::Square(s) => s.pos(seg, d, info),
            Self::Round(r) => r.pos(seg, d, info),
        }
    }

    /// Vertical world scale.
    pub fn vertical_scale(&self) -> f64 {
        match self {
            Self::Square(d) => d.vertical_scale(),
            Self::Round(d) => d.vertical_scale(),
        }
    }
}

/// World-space center of tile `pos`.
fn tile_center(pos: &[i32], vertical_scale: f64) -> WorldPos {
    let mut c: WorldPos = pos.iter().map(|&p| f64::from(p) + 0.5).collect();
    c[Dir::VERTICAL_AXIS] *= vertical_scale;
    c
}

/// World-space vector one half-tile across face `dir`.
fn half_step(dim: usize, dir: Dir, vertical_scale: f64) -> WorldPos {
    let mut v: WorldPos = smallvec![0.0; dim];
    let len = if dir.is_vertical() {
        0.5 * vertical_scale
    } else {
        0.5
    };
    dir.apply(&mut v, len);
    v
}

/// `base + Σ kᵢ·vᵢ`, written into `out`.
fn combine(out: &mut WorldPos, base: &[f64], terms: &[(f64, &[f64])]) {
    out.clear();
    out.extend(base.iter().copied());
    for &(k, v) in terms {
        for (o, x) in out.iter_mut().zip(v) {
            *o += k * x;
        }
    }
}

/// Unit vector along `dir`.
fn unit(dim: usize, dir: Dir) -> WorldPos {
    let mut v: WorldPos = smallvec![0.0; dim];
    dir.apply(&mut v, 1.0);
    v
}
