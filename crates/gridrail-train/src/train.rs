//! Trains: vehicles spaced along one continuous path.

use gridrail_core::{Dir, TileId};
use gridrail_path::{ContinuousPath, PathInfo, PathIter};
use gridrail_track::{SwitchChoice, TrackGraph};

use crate::config::{PlacementTier, TrainConfig};
use crate::error::TrainError;
use crate::vehicle::Vehicle;

/// Where a new train's leading vehicle is centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainStart {
    /// Starting tile.
    pub tile: TileId,
    /// Face the train's direction of travel enters the tile through.
    pub from_dir: Dir,
    /// Distance from that face.
    pub offset: f64,
}

/// A chain of vehicles on a [`ContinuousPath`].
///
/// The path's head is the center of the first vehicle and its tail the
/// center of the last; every other vehicle sits `half + gap + half`
/// behind its predecessor.
pub struct Train<V> {
    vehicles: Vec<V>,
    path: ContinuousPath,
    gap: f64,
    tier: PlacementTier,
    pose: PathInfo,
}

impl<V: Vehicle> Train<V> {
    /// Scale `vehicles`, build the path at `start` and place the train
    /// behind its leading vehicle.
    ///
    /// A train longer than the track behind `start` is pulled forward
    /// until it fits; if the track cannot hold it at all, the train is not
    /// created.
    pub fn new(
        graph: &mut TrackGraph,
        mut vehicles: Vec<V>,
        config: &TrainConfig,
        start: TrainStart,
    ) -> Result<Self, TrainError> {
        config.validate()?;
        if vehicles.is_empty() {
            return Err(TrainError::NoVehicles);
        }
        let detail = config.tier.detail(&config.geometry)?;
        for v in &mut vehicles {
            v.scale_to(config.car_length, config.car_scale);
        }
        let path = ContinuousPath::new(graph, detail, start.tile, start.from_dir, start.offset)?;
        let mut train = Self {
            vehicles,
            path,
            gap: config.gap,
            tier: config.tier,
            pose: PathInfo::default(),
        };
        train.place_initial(graph)?;
        log::debug!(
            "train of {} vehicles placed at tile {}",
            train.vehicles.len(),
            start.tile
        );
        Ok(train)
    }

    fn place_initial(&mut self, graph: &mut TrackGraph) -> Result<(), TrainError> {
        let orient = self.tier.orients();
        let mut it = self.path.initial_iter(graph);
        place_along(&mut it, self.vehicles.iter_mut(), self.gap, orient, &mut self.pose);
        let shortfall = it.shortfall();
        it.prune();
        if shortfall <= 0.0 {
            return Ok(());
        }

        log::warn!("train overhangs a dead end by {shortfall}; pulling it forward");
        if !self.path.move_forward(graph, shortfall, SwitchChoice::First) {
            return Err(TrainError::TrackTooShort { shortfall });
        }
        let mut it = self.path.head_to_tail_iter();
        place_along(&mut it, self.vehicles.iter_mut(), self.gap, orient, &mut self.pose);
        it.prune();
        Ok(())
    }

    /// Move forward by `delta` and re-place every vehicle.
    ///
    /// Returns `false` if the head hit a dead end.
    pub fn move_forward(&mut self, graph: &mut TrackGraph, delta: f64, choice: SwitchChoice) -> bool {
        let moved = self.path.move_forward(graph, delta, choice);
        let orient = self.tier.orients();
        let mut it = self.path.head_to_tail_iter();
        place_along(&mut it, self.vehicles.iter_mut(), self.gap, orient, &mut self.pose);
        it.prune();
        moved
    }

    /// Move backward by `delta` and re-place every vehicle.
    ///
    /// Returns `false` if the tail hit a dead end.
    pub fn move_reverse(&mut self, graph: &mut TrackGraph, delta: f64, choice: SwitchChoice) -> bool {
        let moved = self.path.move_reverse(graph, delta, choice);
        let orient = self.tier.orients();
        let mut it = self.path.tail_to_head_iter();
        place_along(
            &mut it,
            self.vehicles.iter_mut().rev(),
            self.gap,
            orient,
            &mut self.pose,
        );
        it.prune();
        moved
    }

    /// Vehicles, leading first.
    pub fn vehicles(&self) -> &[V] {
        &self.vehicles
    }

    /// The path under the train.
    pub fn path(&self) -> &ContinuousPath {
        &self.path
    }

    /// Number of path segments currently kept.
    pub fn retained_segments(&self) -> usize {
        self.path.len()
    }

    /// Level of detail.
    pub fn tier(&self) -> PlacementTier {
        self.tier
    }
}

/// Place `vehicles` one after another along `it`, the first at the
/// cursor. Returns `false` if the walk hit a dead end.
fn place_along<'v, V: Vehicle + 'v>(
    it: &mut PathIter<'_>,
    vehicles: impl Iterator<Item = &'v mut V>,
    gap: f64,
    orient: bool,
    pose: &mut PathInfo,
) -> bool {
    let mut fits = true;
    let mut prev_half = None;
    for v in vehicles {
        let half = 0.5 * v.length();
        let dist = prev_half.map_or(0.0, |p| p + gap + half);
        fits &= it.step(dist);
        it.pose(pose);
        v.place(pose, orient);
        prev_half = Some(half);
    }
    fits
}
