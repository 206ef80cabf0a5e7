//! Test utilities and track fixtures for gridrail development.
//!
//! Provides a [`ClosedCells`] occupancy mock, float comparison helpers
//! and, in [`fixtures`], ready-built track layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use gridrail_core::{Coord, OccupancyMap};

/// Occupancy map where every cell is open except a listed few.
#[derive(Default)]
pub struct ClosedCells {
    cells: HashSet<Coord>,
}

impl ClosedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `cell`.
    pub fn close(&mut self, cell: &[i32]) -> &mut Self {
        self.cells.insert(Coord::from_slice(cell));
        self
    }
}

impl OccupancyMap for ClosedCells {
    fn is_open_cell(&self, cell: &[i32]) -> bool {
        !self.cells.contains(cell)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Assert two points agree within `tol`.
#[track_caller]
pub fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "dimension mismatch: {a:?} vs {b:?}");
    let d = distance(a, b);
    assert!(d <= tol, "{a:?} and {b:?} are {d} apart (tolerance {tol})");
}
