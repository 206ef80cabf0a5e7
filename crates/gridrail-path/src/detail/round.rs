use std::f64::consts::FRAC_PI_2;

use crate::detail::{combine, tile_center, unit, PathInfo};
use crate::error::{GeometryConstraint, PathError};
use crate::path_seg::PathSeg;

/// High-detail geometry with rounded curves and ramps.
///
/// A curve is a straight of length `margin`, a quarter arc of radius
/// `0.5 - margin` and another `margin` straight. A ramp half climbs from
/// a horizontal face to a vertical one through three zones:
///
/// * `flat`: level run from the horizontal face,
/// * `arc`: circular arc of radius `R` tilting up to the ramp angle `θ`,
/// * `incline`: straight at angle `θ` to the vertical face center.
///
/// The zone lengths solve `flat + R·sin θ + incline·cos θ = 0.5` and
/// `R·(1 − cos θ) + incline·sin θ = 0.5·vertical_scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundDetail {
    margin: f64,
    vertical_scale: f64,
    theta: f64,
    radius: f64,
    flat: f64,
    arc: f64,
    incline: f64,
    vertical_len: f64,
}

impl RoundDetail {
    /// Round geometry, or [`PathError::GeometryInfeasible`] naming the
    /// first constraint the parameters violate.
    pub fn new(
        margin: f64,
        vertical_scale: f64,
        vertical_angle_deg: f64,
        vertical_radius: f64,
    ) -> Result<Self, PathError> {
        let infeasible = |constraint, reason: String| {
            Err(PathError::GeometryInfeasible { constraint, reason })
        };
        if !(0.0..0.5).contains(&margin) {
            return infeasible(
                GeometryConstraint::Margin,
                format!("margin must lie in [0, 0.5), got {margin}"),
            );
        }
        if !(vertical_scale.is_finite() && vertical_scale > 0.0) {
            return infeasible(
                GeometryConstraint::VerticalScale,
                format!("vertical_scale must be finite and positive, got {vertical_scale}"),
            );
        }
        if !(vertical_angle_deg > 0.0 && vertical_angle_deg <= 90.0) {
            return infeasible(
                GeometryConstraint::VerticalAngle,
                format!("vertical_angle must lie in (0, 90] degrees, got {vertical_angle_deg}"),
            );
        }
        if !(vertical_radius.is_finite() && vertical_radius > 0.0) {
            return infeasible(
                GeometryConstraint::VerticalRadius,
                format!("vertical_radius must be finite and positive, got {vertical_radius}"),
            );
        }

        let theta = vertical_angle_deg.to_radians();
        let (sin, cos) = theta.sin_cos();
        let rise = 0.5 * vertical_scale;
        if 0.5 - rise * cos / sin <= 0.0 {
            return infeasible(
                GeometryConstraint::AngleTooShallow,
                format!("{vertical_angle_deg}° cannot climb {rise} within half a tile"),
            );
        }
        let r = vertical_radius;
        let incline = (rise - r * (1.0 - cos)) / sin;
        if incline <= 0.0 {
            return infeasible(
                GeometryConstraint::RadiusTooTall,
                format!("radius {r} at {vertical_angle_deg}° rises past {rise}"),
            );
        }
        let flat = 0.5 - r * sin - incline * cos;
        if flat <= 0.0 {
            return infeasible(
                GeometryConstraint::RadiusTooWide,
                format!("radius {r} at {vertical_angle_deg}° overruns half a tile"),
            );
        }
        let arc = r * theta;
        Ok(Self {
            margin,
            vertical_scale,
            theta,
            radius: r,
            flat,
            arc,
            incline,
            vertical_len: flat + arc + incline,
        })
    }

    /// Vertical world scale.
    pub fn vertical_scale(&self) -> f64 {
        self.vertical_scale
    }

    /// Straight run at each end of a curve.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Lengths of the flat, arc and incline zones of a ramp half.
    pub fn vertical_parts(&self) -> (f64, f64, f64) {
        (self.flat, self.arc, self.incline)
    }

    /// Arc length of `seg`.
    pub fn len(&self, seg: &PathSeg) -> f64 {
        if seg.is_vertical() {
            self.vertical_len
        } else if seg.is_straight() {
            1.0
        } else {
            self.curve_len()
        }
    }

    fn curve_len(&self) -> f64 {
        2.0 * self.margin + (0.5 - self.margin) * FRAC_PI_2
    }

    pub(crate) fn pos(&self, seg: &PathSeg, d: f64, info: &mut PathInfo) {
        let dim = seg.pos.len();
        info.reset(dim);
        info.hint = seg.hint;
        info.helix = f64::from(seg.hbase);
        let c = tile_center(&seg.pos, self.vertical_scale);

        if seg.is_vertical() {
            self.ramp_pos(seg, d, &c, info);
            return;
        }

        let u = unit(dim, seg.from_dir);
        info.from_dir = seg.heading_in();
        if seg.is_straight() {
            combine(&mut info.pos, &c, &[(0.5 - d, &u)]);
            info.to_dir = info.from_dir;
            let span = 1.0 - 2.0 * self.margin;
            info.helix += f64::from(seg.helix) * ((d - self.margin) / span).clamp(0.0, 1.0);
            return;
        }

        let v = unit(dim, seg.to_dir);
        info.to_dir = seg.to_dir;
        let m = self.margin;
        let r = 0.5 - m;
        let quarter = r * FRAC_PI_2;
        if d <= m {
            combine(&mut info.pos, &c, &[(0.5 - d, &u)]);
        } else if d < m + quarter {
            let phi = (d - m) / r;
            combine(
                &mut info.pos,
                &c,
                &[(r * (1.0 - phi.sin()), &u), (r * (1.0 - phi.cos()), &v)],
            );
            info.angle = phi / FRAC_PI_2;
        } else {
            combine(&mut info.pos, &c, &[(d - m - quarter + r, &v)]);
            info.angle = 1.0;
        }
    }

    fn ramp_pos(&self, seg: &PathSeg, d: f64, c: &[f64], info: &mut PathInfo) {
        let dim = seg.pos.len();
        if seg.from_dir.is_vertical() {
            // Enter through the floor or ceiling, leave horizontally: the
            // climb profile read backwards from the horizontal face.
            let (s, t, tilt) = self.profile(self.vertical_len - d);
            let out = unit(dim, seg.to_dir);
            let vert = unit(dim, seg.from_dir);
            combine(&mut info.pos, c, &[(0.5 - s, &out), (t, &vert)]);
            info.from_dir = seg.to_dir;
            info.to_dir = seg.from_dir.opposite();
            info.angle = tilt / FRAC_PI_2;
        } else {
            let (s, t, tilt) = self.profile(d);
            let back = unit(dim, seg.from_dir);
            let vert = unit(dim, seg.to_dir);
            combine(&mut info.pos, c, &[(0.5 - s, &back), (t, &vert)]);
            info.from_dir = seg.heading_in();
            info.to_dir = seg.to_dir;
            info.angle = tilt / FRAC_PI_2;
        }
    }

    /// Horizontal run, rise and tilt at distance `x` from the horizontal
    /// face of a ramp half.
    fn profile(&self, x: f64) -> (f64, f64, f64) {
        let r = self.radius;
        if x <= self.flat {
            (x, 0.0, 0.0)
        } else if x <= self.flat + self.arc {
            let phi = (x - self.flat) / r;
            (self.flat + r * phi.sin(), r * (1.0 - phi.cos()), phi)
        } else {
            let e = x - self.flat - self.arc;
            let (sin, cos) = self.theta.sin_cos();
            (
                self.flat + r * sin + e * cos,
                r * (1.0 - cos) + e * sin,
                self.theta,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrail_core::{Coord, Dir, TileId};
    use proptest::prelude::*;

    fn seg(pos: &[i32], from: u8, to: u8, helix: i8) -> PathSeg {
        PathSeg {
            tile: TileId(0),
            pos: Coord::from_slice(pos),
            from_dir: Dir(from),
            to_dir: Dir(to),
            helix,
            hbase: 0,
            hint: None,
        }
    }

    fn detail() -> RoundDetail {
        RoundDetail::new(0.1, 1.0, 60.0, 0.2).unwrap()
    }

    fn pose(d: &RoundDetail, s: &PathSeg, x: f64) -> PathInfo {
        let mut info = PathInfo::default();
        d.pos(s, x, &mut info);
        info
    }

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    // ── Construction ──────────────────────────────────────────────

    #[test]
    fn default_profile_lengths() {
        let d = detail();
        let (flat, arc, incline) = d.vertical_parts();
        assert!((flat - 0.0958).abs() < 1e-3);
        assert!((arc - 0.2094).abs() < 1e-3);
        assert!((incline - 0.4619).abs() < 1e-3);
        let ramp = seg(&[0, 0, 0], 1, 2, 0);
        assert_eq!(d.len(&ramp), flat + arc + incline);
        assert_eq!(d.len(&seg(&[0, 0, 0], 1, 0, 0)), 1.0);
    }

    #[test]
    fn infeasible_parameters_name_their_constraint() {
        let cases = [
            (0.5, 1.0, 60.0, 0.2, GeometryConstraint::Margin),
            (-0.1, 1.0, 60.0, 0.2, GeometryConstraint::Margin),
            (0.1, 0.0, 60.0, 0.2, GeometryConstraint::VerticalScale),
            (0.1, 1.0, 0.0, 0.2, GeometryConstraint::VerticalAngle),
            (0.1, 1.0, 91.0, 0.2, GeometryConstraint::VerticalAngle),
            (0.1, 1.0, 60.0, 0.0, GeometryConstraint::VerticalRadius),
            (0.1, 1.0, 30.0, 0.2, GeometryConstraint::AngleTooShallow),
            (0.1, 1.0, 60.0, 1.5, GeometryConstraint::RadiusTooTall),
            (0.1, 2.0, 90.0, 0.6, GeometryConstraint::RadiusTooWide),
        ];
        for (m, vs, angle, r, expected) in cases {
            match RoundDetail::new(m, vs, angle, r) {
                Err(PathError::GeometryInfeasible { constraint, .. }) => {
                    assert_eq!(constraint, expected, "{m} {vs} {angle} {r}")
                }
                other => panic!("expected {expected:?}, got {other:?}"),
            }
        }
    }

    // ── Curves and straights ──────────────────────────────────────

    #[test]
    fn curve_is_continuous_between_zones() {
        let d = detail();
        let s = seg(&[0, 0, 0], 1, 4, 0);
        let m = d.margin();
        let quarter = (0.5 - m) * FRAC_PI_2;
        for x in [m, m + quarter] {
            let before = pose(&d, &s, x - 1e-10);
            let after = pose(&d, &s, x + 1e-10);
            assert!(close(&before.pos, &after.pos), "jump at {x}");
        }
        let end = pose(&d, &s, d.len(&s));
        assert!(close(&end.pos, &[0.5, 0.5, 1.0]));
        assert_eq!(end.angle, 1.0);
        let mid = pose(&d, &s, m + quarter / 2.0);
        assert!((mid.angle - 0.5).abs() < 1e-12);
        assert_eq!((mid.from_dir, mid.to_dir), (Dir(0), Dir(4)));
    }

    #[test]
    fn straight_helix_ramps_between_margins() {
        let d = detail();
        let mut s = seg(&[0, 0, 0, 0], 1, 0, 1);
        s.hbase = 3;
        assert_eq!(pose(&d, &s, 0.05).helix, 3.0);
        assert!((pose(&d, &s, 0.5).helix - 3.5).abs() < 1e-12);
        assert_eq!(pose(&d, &s, 1.0).helix, 4.0);
    }

    // ── Ramps ─────────────────────────────────────────────────────

    #[test]
    fn ramp_halves_meet_at_shared_face() {
        let d = RoundDetail::new(0.1, 1.5, 75.0, 0.2).unwrap();
        let bottom = seg(&[0, 0, 0], 1, 2, 0);
        let top = seg(&[0, 1, 0], 3, 0, 0);
        let len = d.len(&bottom);

        let start = pose(&d, &bottom, 0.0);
        assert!(close(&start.pos, &[0.0, 0.75, 0.5]));
        assert_eq!(start.angle, 0.0);

        let a = pose(&d, &bottom, len);
        let b = pose(&d, &top, 0.0);
        assert!(close(&a.pos, &b.pos));
        assert!(close(&a.pos, &[0.5, 1.5, 0.5]));
        assert!((a.angle - b.angle).abs() < 1e-12);
        assert_eq!((a.from_dir, a.to_dir), (Dir(0), Dir::UP));
        assert_eq!((b.from_dir, b.to_dir), (Dir(0), Dir::UP));

        let end = pose(&d, &top, len);
        assert!(close(&end.pos, &[1.0, 2.25, 0.5]));
        assert!(end.angle.abs() < 1e-12);
    }

    #[test]
    fn descending_ramp_reports_downward_travel() {
        let d = detail();
        // Upper half entered from +x going down.
        let top = seg(&[0, 1, 0], 0, 3, 0);
        let p = pose(&d, &top, d.len(&top));
        assert!(close(&p.pos, &[0.5, 1.0, 0.5]));
        assert_eq!((p.from_dir, p.to_dir), (Dir(1), Dir::DOWN));
        assert!((p.angle - 60.0 / 90.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn ramp_profile_is_continuous(x in 0.0f64..1.0) {
            let d = detail();
            let s = seg(&[0, 0, 0], 1, 2, 0);
            let x = x * d.len(&s);
            let p = pose(&d, &s, x);
            let q = pose(&d, &s, x + 1e-7);
            let dist: f64 = p.pos.iter().zip(&q.pos).map(|(a, b)| (a - b).powi(2)).sum::<f64>().sqrt();
            prop_assert!(dist <= 1.1e-7);
        }
    }
}
