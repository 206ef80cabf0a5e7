use crate::detail::{combine, half_step, tile_center, PathInfo};
use crate::error::{GeometryConstraint, PathError};
use crate::path_seg::PathSeg;

/// Low-detail geometry: every level segment is one unit long and turns
/// pivot at the tile center; ramp halves run diagonally between face
/// centers.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareDetail {
    vertical_scale: f64,
}

impl SquareDetail {
    /// Square geometry with the vertical axis stretched by
    /// `vertical_scale`.
    pub fn new(vertical_scale: f64) -> Result<Self, PathError> {
        if !(vertical_scale.is_finite() && vertical_scale > 0.0) {
            return Err(PathError::GeometryInfeasible {
                constraint: GeometryConstraint::VerticalScale,
                reason: format!("vertical_scale must be finite and positive, got {vertical_scale}"),
            });
        }
        Ok(Self { vertical_scale })
    }

    /// Vertical world scale.
    pub fn vertical_scale(&self) -> f64 {
        self.vertical_scale
    }

    /// Arc length of `seg`.
    pub fn len(&self, seg: &PathSeg) -> f64 {
        if seg.is_vertical() {
            0.5 * (1.0 + self.vertical_scale * self.vertical_scale).sqrt()
        } else {
            1.0
        }
    }

    pub(crate) fn pos(&self, seg: &PathSeg, d: f64, info: &mut PathInfo) {
        let dim = seg.pos.len();
        info.reset(dim);
        info.hint = seg.hint;
        let c = tile_center(&seg.pos, self.vertical_scale);
        let entry = half_step(dim, seg.from_dir, self.vertical_scale);
        let exit = half_step(dim, seg.to_dir, self.vertical_scale);
        if seg.is_vertical() {
            let t = d / self.len(seg);
            combine(&mut info.pos, &c, &[(1.0 - t, &entry), (t, &exit)]);
        } else if d <= 0.5 {
            combine(&mut info.pos, &c, &[(1.0 - 2.0 * d, &entry)]);
        } else {
            combine(&mut info.pos, &c, &[(2.0 * d - 1.0, &exit)]);
        }
    }
}
