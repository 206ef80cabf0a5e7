//! The [`Vehicle`] trait and the stock [`Car`].

use gridrail_path::PathInfo;

/// Something a [`Train`](crate::Train) can place along its path.
///
/// The train scales every vehicle once at construction, then calls
/// [`place`](Vehicle::place) with the pose of the vehicle's center after
/// each move.
pub trait Vehicle {
    /// Resize to `length` tile units with model scale `scale`.
    fn scale_to(&mut self, length: f64, scale: f64);

    /// Length along the track, used for spacing.
    fn length(&self) -> f64;

    /// Move to `pose`. When `orient` is false only
    /// [`pos`](PathInfo::pos) is meaningful.
    fn place(&mut self, pose: &PathInfo, orient: bool);
}

/// A plain vehicle that remembers its last pose.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Car {
    length: f64,
    scale: f64,
    pose: PathInfo,
    oriented: bool,
}

impl Car {
    /// A car with zero length, sized by the train that owns it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pose received.
    pub fn pose(&self) -> &PathInfo {
        &self.pose
    }

    /// Whether the last pose carried orientation.
    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    /// Model scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Vehicle for Car {
    fn scale_to(&mut self, length: f64, scale: f64) {
        self.length = length;
        self.scale = scale;
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn place(&mut self, pose: &PathInfo, orient: bool) {
        self.pose.clone_from(pose);
        self.oriented = orient;
    }
}
