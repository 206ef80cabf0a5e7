//! Axis-signed direction encoding.
//!
//! A D-dimensional grid has `2·D` face directions. Direction `d` lies on
//! axis `d / 2` and points along the positive half of that axis iff `d`
//! is even, so the opposite direction is always `d ^ 1`.

use std::fmt;
use std::ops::{Add, Sub};

/// One of the `2·D` axis-signed directions of a D-dimensional grid.
///
/// # Examples
///
/// ```
/// use gridrail_core::Dir;
///
/// let east = Dir::for_axis(0, false);
/// assert_eq!(east, Dir(0));
/// assert_eq!(east.opposite(), Dir(1));
/// assert!(east.is_opposite(Dir(1)));
///
/// let mut pos = [3i32, 0, 0];
/// Dir(1).apply(&mut pos, 2);
/// assert_eq!(pos, [1, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dir(pub u8);

impl Dir {
    /// Index of the vertical axis. Ramps climb along this axis.
    pub const VERTICAL_AXIS: usize = 1;

    /// Upward direction (positive vertical axis).
    pub const UP: Dir = Dir(2);

    /// Downward direction (negative vertical axis).
    pub const DOWN: Dir = Dir(3);

    /// Direction along `axis`, negative when `opposite` is set.
    pub fn for_axis(axis: usize, opposite: bool) -> Dir {
        Dir((axis * 2) as u8 + u8::from(opposite))
    }

    /// All `2·dim` directions in index order.
    pub fn all(dim: usize) -> impl Iterator<Item = Dir> {
        (0..(2 * dim) as u8).map(Dir)
    }

    /// Raw index, usable for neighbor tables and lookup tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Axis this direction lies on.
    pub fn axis(self) -> usize {
        (self.0 / 2) as usize
    }

    /// Whether the direction points along the positive half of its axis.
    pub fn is_positive(self) -> bool {
        self.0 & 1 == 0
    }

    /// `+1` for positive directions, `-1` for negative ones.
    pub fn sign(self) -> i32 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }

    /// Whether `other` is the reverse of `self`.
    pub fn is_opposite(self, other: Dir) -> bool {
        self.0 ^ 1 == other.0
    }

    /// The reverse direction.
    pub fn opposite(self) -> Dir {
        Dir(self.0 ^ 1)
    }

    /// Whether the direction lies on [`Dir::VERTICAL_AXIS`].
    pub fn is_vertical(self) -> bool {
        self.axis() == Self::VERTICAL_AXIS
    }

    /// Add `±distance` to `v[self.axis()]`.
    pub fn apply<T>(self, v: &mut [T], distance: T)
    where
        T: Copy + Add<Output = T> + Sub<Output = T>,
    {
        let a = self.axis();
        v[a] = if self.is_positive() {
            v[a] + distance
        } else {
            v[a] - distance
        };
    }

    /// Image of `self` under the quarter rotation that carries `from`
    /// onto `to` (and `to` onto `from.opposite()`).
    ///
    /// Directions on the two axes outside the rotation plane are fixed.
    /// `from` and `to` must lie on different axes.
    pub fn rotate(self, from: Dir, to: Dir) -> Dir {
        debug_assert_ne!(from.axis(), to.axis());
        if self == from {
            to
        } else if self == from.opposite() {
            to.opposite()
        } else if self == to {
            from.opposite()
        } else if self == to.opposite() {
            from
        } else {
            self
        }
    }

    /// Canonical basis `(e1, e2)` of the sideways plane for a 4-D heading.
    ///
    /// For a horizontal heading in 4-D, the two axes that are neither the
    /// heading's nor vertical span the plane a helix twists in. Helix
    /// orientation is measured in quarter turns from `e1` towards `e2`.
    /// Returns `None` for vertical headings and for directions outside
    /// 4-D.
    pub fn sideways_basis(self) -> Option<(Dir, Dir)> {
        let (e1, e2) = match self.0 {
            0 => (6, 5),
            1 => (6, 4),
            4 => (6, 0),
            5 => (6, 1),
            6 => (0, 4),
            7 => (0, 5),
            _ => return None,
        };
        Some((Dir(e1), Dir(e2)))
    }

    /// The sideways direction `quarter_turns` steps from `e1` towards
    /// `e2` in [`sideways_basis`](Self::sideways_basis).
    pub fn sideways(self, quarter_turns: u8) -> Option<Dir> {
        let (e1, e2) = self.sideways_basis()?;
        Some(match quarter_turns % 4 {
            0 => e1,
            1 => e2,
            2 => e1.opposite(),
            _ => e2.opposite(),
        })
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_positive() { '+' } else { '-' };
        match self.axis() {
            0 => write!(f, "{sign}x"),
            1 => write!(f, "{sign}y"),
            2 => write!(f, "{sign}z"),
            3 => write!(f, "{sign}w"),
            a => write!(f, "{sign}a{a}"),
        }
    }
}
