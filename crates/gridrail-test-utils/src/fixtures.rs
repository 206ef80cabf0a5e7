//! Reusable track layouts.
//!
//! Every layout starts its build cursor on the empty tile at the origin
//! heading +x, so its first segment lies on `[1, 0, ..]`.

use gridrail_core::{Dir, TileId};
use gridrail_track::{TrackConfig, TrackGraph};

pub const PX: Dir = Dir(0);
pub const NX: Dir = Dir(1);
pub const PZ: Dir = Dir(4);
pub const NZ: Dir = Dir(5);
pub const PW: Dir = Dir(6);

/// Empty graph of dimension `dim` with switch seed 0.
pub fn empty(dim: usize) -> TrackGraph {
    TrackGraph::new(TrackConfig {
        dim,
        switch_seed: 0,
    })
    .expect("fixture dimension")
}

/// Origin of a `dim`-dimensional grid.
pub fn origin(dim: usize) -> Vec<i32> {
    vec![0; dim]
}

/// Graph with `commands` built from the origin heading +x, "in" +z.
pub fn built(dim: usize, commands: &str) -> TrackGraph {
    let mut g = empty(dim);
    g.build(&origin(dim), PX, PZ, commands)
        .expect("fixture track builds");
    g
}

/// `n` straight segments on `[1, 0, ..]` through `[n, 0, ..]`.
pub fn straight_line(dim: usize, n: usize) -> TrackGraph {
    built(dim, &"s".repeat(n))
}

/// Closed oval: two straights of `n` tiles joined by U-turns.
pub fn oval(dim: usize, n: usize) -> TrackGraph {
    let straight = "s".repeat(n);
    built(dim, &format!("{straight}rr{straight}rr"))
}

/// Level track, a ramp up, and more level track at height 1.
pub fn ramp_line() -> TrackGraph {
    built(3, "ssuss")
}

/// Square loop of four curves in the x–w plane of a 4-D grid.
pub fn xw_loop() -> TrackGraph {
    let mut g = empty(4);
    g.build(&origin(4), PX, PZ, "rrrr").expect("fixture track builds");
    g
}

/// First laid tile of a fixture, entered from -x.
pub fn first_tile(graph: &TrackGraph) -> TileId {
    let mut pos = origin(graph.dim());
    pos[0] = 1;
    graph.tile_at(&pos).expect("fixture has a first tile")
}
