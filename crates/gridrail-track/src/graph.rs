//! The tile arena and its neighbor/switch logic.

use gridrail_core::{Coord, Dir, HintId, OccupancyMap, TileId};
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::config::TrackConfig;
use crate::error::TrackError;
use crate::segment::Segment;
use crate::tile::Tile;

/// How to pick a segment when several leave the same entry face.
///
/// A tile's manual switch always wins when it names a segment touching
/// the entry face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwitchChoice {
    /// The first matching segment in insertion order.
    #[default]
    First,
    /// A uniformly random matching segment, drawn from the graph's
    /// seeded generator.
    Random,
}

/// Arena of tiles keyed by integer position.
///
/// Tiles are never removed. Each position maps to at most one tile, and
/// neighbor links are kept mutually consistent: linking A to B across
/// `dir` also links B to A across `dir.opposite()`.
#[derive(Clone, Debug)]
pub struct TrackGraph {
    dim: usize,
    tiles: Vec<Tile>,
    index: IndexMap<Coord, TileId>,
    rng: ChaCha8Rng,
}

impl TrackGraph {
    /// Create an empty graph.
    pub fn new(config: TrackConfig) -> Result<Self, TrackError> {
        config.validate()?;
        Ok(Self {
            dim: config.dim,
            tiles: Vec::new(),
            index: IndexMap::new(),
            rng: ChaCha8Rng::seed_from_u64(config.switch_seed),
        })
    }

    /// Grid dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tiles ever created.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tile by id.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this graph.
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Tile at `pos`, if one exists.
    pub fn tile_at(&self, pos: &[i32]) -> Option<TileId> {
        self.index.get(pos).copied()
    }

    /// Segments at `pos`; empty where there is no tile.
    pub fn segments_at(&self, pos: &[i32]) -> &[Segment] {
        self.tile_at(pos)
            .map(|id| self.tile(id).segments())
            .unwrap_or(&[])
    }

    /// Whether any rail passes through `pos`.
    pub fn is_occupied(&self, pos: &[i32]) -> bool {
        !self.segments_at(pos).is_empty()
    }

    /// All tiles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, t)| (TileId(i as u32), t))
    }

    /// Linked neighbor of `tile` across `dir`, without creating anything.
    pub fn neighbor(&self, tile: TileId, dir: Dir) -> Option<TileId> {
        self.tile(tile).neighbor(dir)
    }

    /// Tile at `pos`, creating an empty one if needed.
    pub fn find_or_create_tile(&mut self, pos: &[i32]) -> TileId {
        debug_assert_eq!(pos.len(), self.dim);
        if let Some(&id) = self.index.get(pos) {
            return id;
        }
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile::new(Coord::from_slice(pos)));
        self.index.insert(Coord::from_slice(pos), id);
        log::trace!("created tile {id} at {pos:?}");
        id
    }

    /// Step `pos` one cell along `dir` from `from`, find or create the
    /// tile there, and link the two.
    pub fn advance(&mut self, from: TileId, pos: &mut Coord, dir: Dir) -> TileId {
        dir.apply(pos, 1);
        let to = self.find_or_create_tile(pos);
        self.link(from, to, dir);
        to
    }

    /// Linked neighbor of `tile` across `dir`, discovering (and creating,
    /// if absent) the adjacent tile on first use.
    pub fn neighbor_or_grow(&mut self, tile: TileId, dir: Dir) -> TileId {
        if let Some(n) = self.neighbor(tile, dir) {
            return n;
        }
        let mut pos = Coord::from_slice(self.tile(tile).pos());
        self.advance(tile, &mut pos, dir)
    }

    /// Add `segment` to `tile`. Identical segments are skipped.
    pub fn add_segment(&mut self, tile: TileId, segment: Segment) -> Result<(), TrackError> {
        let faces = 2 * self.dim;
        if segment.from_dir().index() >= faces || segment.to_dir().index() >= faces {
            return Err(TrackError::InvalidSegment {
                from: segment.from_dir(),
                to: segment.to_dir(),
                reason: "direction outside the grid dimension",
            });
        }
        if segment.helix() != 0 && self.dim < 4 {
            return Err(TrackError::InvalidSegment {
                from: segment.from_dir(),
                to: segment.to_dir(),
                reason: "helix requires a 4-D grid",
            });
        }
        let added = self.tiles[tile.index()].add_segment(segment)?;
        if !added {
            log::debug!("tile {tile}: segment {segment:?} already present");
        }
        Ok(())
    }

    /// Choose the segment a train entering `tile` through face `entry`
    /// follows, or `None` at a dead end.
    pub fn select_segment(
        &mut self,
        tile: TileId,
        entry: Dir,
        choice: SwitchChoice,
    ) -> Option<Segment> {
        let t = &self.tiles[tile.index()];
        if let Some(s) = t.switch().and_then(|i| t.segments().get(i)) {
            if s.connects(entry) {
                return Some(*s);
            }
        }
        let candidates: SmallVec<[Segment; 4]> = t.segments_entering(entry).copied().collect();
        match (choice, candidates.len()) {
            (_, 0) => None,
            (SwitchChoice::Random, n) if n > 1 => Some(candidates[self.rng.gen_range(0..n)]),
            _ => Some(candidates[0]),
        }
    }

    /// Pin `tile`'s switch to segment `index`. Returns `false` (and
    /// changes nothing) if the tile has no such segment.
    pub fn set_switch(&mut self, tile: TileId, index: usize) -> bool {
        let t = &mut self.tiles[tile.index()];
        if index >= t.segments().len() {
            return false;
        }
        t.set_switch(Some(index));
        true
    }

    /// Return `tile` to automatic segment selection.
    pub fn clear_switch(&mut self, tile: TileId) {
        self.tiles[tile.index()].set_switch(None);
    }

    /// Advance `tile`'s switch to the next segment with an end on `face`,
    /// wrapping around.
    ///
    /// A switch not currently on `face` moves to the first segment there.
    /// Faces with fewer than two segments have nothing to switch and
    /// return `None`.
    pub fn cycle_switch(&mut self, tile: TileId, face: Dir) -> Option<usize> {
        let t = &mut self.tiles[tile.index()];
        let choices: SmallVec<[usize; 4]> = t
            .segments()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.connects(face))
            .map(|(i, _)| i)
            .collect();
        if choices.len() < 2 {
            return None;
        }
        let next = match t
            .switch()
            .and_then(|cur| choices.iter().position(|&i| i == cur))
        {
            Some(k) => choices[(k + 1) % choices.len()],
            None => choices[0],
        };
        t.set_switch(Some(next));
        Some(next)
    }

    /// Mark scenery as attached to `tile`.
    pub fn set_attached(&mut self, tile: TileId, attached: bool) {
        self.tiles[tile.index()].set_attached(attached);
    }

    /// Set or clear `tile`'s rendering hint.
    pub fn set_hint(&mut self, tile: TileId, hint: Option<HintId>) {
        self.tiles[tile.index()].set_hint(hint);
    }

    pub(crate) fn link(&mut self, a: TileId, b: TileId, dir: Dir) {
        self.tiles[a.index()].link(dir, b);
        self.tiles[b.index()].link(dir.opposite(), a);
    }
}

/// A cell is open for free movement iff no rail passes through it.
impl OccupancyMap for TrackGraph {
    fn is_open_cell(&self, cell: &[i32]) -> bool {
        !self.is_occupied(cell)
    }
}
