//! Integer/continuous coordinate conversion and open-cell queries.
//!
//! Cell `c` covers the half-open box `[c, c + 1)` on every axis, so its
//! center sits at `c + 0.5`. A real point whose coordinates are all
//! fractional lies inside exactly one cell; a point with one integral
//! coordinate lies on the face shared by two cells; a point with two or
//! more integral coordinates lies on an edge or corner.
//!
//! Open-ness is closed under these rules: a face point is open only if
//! both cells it separates are open, and edge/corner points are never
//! open. Because closed regions are topologically closed, testing the
//! boundary points a straight move crosses (plus its endpoint) decides
//! the whole move exactly; see [`is_open_move`].

use crate::direction::Dir;
use crate::id::{Coord, WorldPos};
use smallvec::SmallVec;

/// Source of per-cell open/closed information.
///
/// Implemented for any `Fn(&[i32]) -> bool`, so ad-hoc maps can be
/// passed as closures.
pub trait OccupancyMap {
    /// Whether the cell at `cell` may be entered.
    fn is_open_cell(&self, cell: &[i32]) -> bool;
}

impl<F> OccupancyMap for F
where
    F: Fn(&[i32]) -> bool,
{
    fn is_open_cell(&self, cell: &[i32]) -> bool {
        self(cell)
    }
}

/// Result of [`to_cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellLookup {
    /// Cell obtained by flooring every coordinate.
    pub cell: Coord,
    /// When the point lies on exactly one cell face: the cell on the
    /// other side of that face and the direction leading to it from
    /// [`cell`](Self::cell).
    pub boundary: Option<(Coord, Dir)>,
}

/// Center of `cell` in continuous coordinates.
pub fn from_cell(cell: &[i32]) -> WorldPos {
    cell.iter().map(|&c| c as f64 + 0.5).collect()
}

/// Locate the cell (or face-sharing pair of cells) containing `point`.
pub fn to_cell(point: &[f64]) -> CellLookup {
    let cell: Coord = point.iter().map(|&v| v.floor() as i32).collect();
    let mut on_boundary = point
        .iter()
        .enumerate()
        .filter(|(_, v)| is_integral(**v))
        .map(|(axis, _)| axis);
    let boundary = match (on_boundary.next(), on_boundary.next()) {
        (Some(axis), None) => {
            let dir = Dir::for_axis(axis, true);
            let mut other = cell.clone();
            dir.apply(&mut other, 1);
            Some((other, dir))
        }
        _ => None,
    };
    CellLookup { cell, boundary }
}

/// Whether a body may occupy `point`.
///
/// Interior points defer to their cell, face points require both
/// neighboring cells to be open, and points on two or more cell
/// boundaries are always closed so nothing squeezes diagonally through
/// a corner in any dimension.
pub fn is_open<M: OccupancyMap + ?Sized>(point: &[f64], map: &M) -> bool {
    let integral = point.iter().filter(|&&v| is_integral(v)).count();
    if integral >= 2 {
        return false;
    }
    let lookup = to_cell(point);
    if !map.is_open_cell(&lookup.cell) {
        return false;
    }
    match lookup.boundary {
        Some((other, _)) => map.is_open_cell(&other),
        None => true,
    }
}

/// Whether the straight move from `p1` to `p2` stays open throughout.
///
/// Walks the segment boundary by boundary: at each iteration it finds
/// the nearest cell boundary not yet crossed (smallest interpolation
/// fraction over the axes that have not reached `p2`), jumps there with
/// the crossing axes snapped exactly onto the boundary, and tests
/// [`is_open`]. The endpoint is tested last. The start point is assumed
/// open.
pub fn is_open_move<M: OccupancyMap + ?Sized>(p1: &[f64], p2: &[f64], map: &M) -> bool {
    debug_assert_eq!(p1.len(), p2.len());
    let mut cur: WorldPos = SmallVec::from_slice(p1);
    loop {
        let best = (0..cur.len())
            .filter_map(|i| next_boundary(cur[i], p2[i]))
            .map(|(frac, _)| frac)
            .fold(f64::INFINITY, f64::min);
        if !best.is_finite() {
            break;
        }
        let start = cur.clone();
        for i in 0..cur.len() {
            cur[i] = match next_boundary(start[i], p2[i]) {
                Some((frac, boundary)) if frac == best => boundary,
                _ => start[i] + best * (p2[i] - start[i]),
            };
        }
        if !is_open(&cur, map) {
            return false;
        }
    }
    is_open(p2, map)
}

/// Next integral coordinate strictly between `from` and `to`, with the
/// fraction of the way from `from` to `to` at which it is reached.
fn next_boundary(from: f64, to: f64) -> Option<(f64, f64)> {
    if from == to {
        return None;
    }
    let (boundary, crosses) = if to > from {
        let b = from.floor() + 1.0;
        (b, b < to)
    } else {
        let b = from.ceil() - 1.0;
        (b, b > to)
    };
    crosses.then(|| ((boundary - from) / (to - from), boundary))
}

fn is_integral(v: f64) -> bool {
    v == v.floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn open_except(closed: &'static [[i32; 2]]) -> impl Fn(&[i32]) -> bool {
        move |cell: &[i32]| !closed.iter().any(|c| c.as_slice() == cell)
    }

    #[test]
    fn from_cell_adds_half() {
        let p = from_cell(&[0, -1, 3]);
        assert_eq!(p.as_slice(), &[0.5, -0.5, 3.5]);
    }

    #[test]
    fn to_cell_interior_point() {
        let lookup = to_cell(&[1.25, -0.5, 7.9]);
        assert_eq!(lookup.cell, Coord::from_slice(&[1, -1, 7]));
        assert!(lookup.boundary.is_none());
    }

    #[test]
    fn to_cell_face_point_reports_both_cells() {
        let lookup = to_cell(&[2.0, 0.5]);
        assert_eq!(lookup.cell, Coord::from_slice(&[2, 0]));
        let (other, dir) = lookup.boundary.unwrap();
        assert_eq!(other, Coord::from_slice(&[1, 0]));
        assert_eq!(dir, Dir(1));
    }

    #[test]
    fn to_cell_corner_point_has_no_pair() {
        let lookup = to_cell(&[2.0, 1.0, 0.5]);
        assert_eq!(lookup.cell, Coord::from_slice(&[2, 1, 0]));
        assert!(lookup.boundary.is_none());
    }

    #[test]
    fn is_open_classifies_by_boundary_count() {
        let map = open_except(&[[1, 0]]);
        assert!(is_open(&[0.5, 0.5], &map));
        assert!(!is_open(&[1.5, 0.5], &map));
        // Face between (0,0) and (1,0): (1,0) is closed.
        assert!(!is_open(&[1.0, 0.5], &map));
        // Face between (0,0) and (0,1): both open.
        assert!(is_open(&[0.5, 1.0], &map));
        // Corners are never open, even among open cells.
        assert!(!is_open(&[3.0, 3.0], &map));
    }

    #[test]
    fn straight_move_through_open_cells() {
        let map = open_except(&[]);
        assert!(is_open_move(&[0.5, 0.5], &[4.5, 0.5], &map));
    }

    #[test]
    fn move_blocked_by_closed_cell() {
        let map = open_except(&[[2, 0]]);
        assert!(!is_open_move(&[0.5, 0.5], &[4.5, 0.5], &map));
        assert!(is_open_move(&[0.5, 0.5], &[1.9, 0.5], &map));
    }

    #[test]
    fn diagonal_corner_squeeze_is_rejected() {
        let map = open_except(&[[1, 0], [0, 1]]);
        assert!(!is_open_move(&[0.5, 0.5], &[1.5, 1.5], &map));
    }

    #[test]
    fn diagonal_move_past_corner_checks_both_faces() {
        // Crosses x = 1 in row 0, y = 1 in column 1, then x = 2 in row 1.
        let all_open = open_except(&[]);
        assert!(is_open_move(&[0.5, 0.5], &[2.5, 1.2], &all_open));
        let blocked = open_except(&[[1, 0]]);
        assert!(!is_open_move(&[0.5, 0.5], &[2.5, 1.2], &blocked));
    }

    #[test]
    fn closed_endpoint_fails() {
        let map = open_except(&[[0, 1]]);
        assert!(is_open_move(&[0.5, 0.2], &[0.5, 0.9], &map));
        assert!(!is_open_move(&[0.5, 0.5], &[0.5, 1.5], &map));
    }

    #[test]
    fn move_in_four_dimensions() {
        let map = |cell: &[i32]| cell[3] < 2;
        let a: WorldPos = smallvec![0.5, 0.5, 0.5, 0.5];
        let b: WorldPos = smallvec![0.5, 0.5, 0.5, 1.5];
        let c: WorldPos = smallvec![0.5, 0.5, 0.5, 2.5];
        assert!(is_open_move(&a, &b, &map));
        assert!(!is_open_move(&a, &c, &map));
    }

    proptest! {
        #[test]
        fn open_grid_allows_every_axis_move(
            start in prop::collection::vec(-5i32..5, 3),
            axis in 0usize..3,
            len in 1i32..6,
            frac in 0.1f64..0.9,
        ) {
            let map = |_: &[i32]| true;
            let p1: Vec<f64> = start.iter().map(|&c| c as f64 + frac).collect();
            let mut p2 = p1.clone();
            p2[axis] += len as f64;
            prop_assert!(is_open_move(&p1, &p2, &map));
        }
    }
}
