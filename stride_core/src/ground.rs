//! Ground probing.
//!
//! The controller never walks the host's collision world itself; it asks a
//! [`GroundQuery`] once per tick and reuses that single answer for
//! locomotion, jumping, and footstep pacing, so all of them agree on
//! groundedness within the tick.

use crate::math::Vec3;

/// Downward probe into the host's collision world.
pub trait GroundQuery: Send + Sync {
    /// Whether a probe of `distance` straight down from `origin` hits
    /// standable geometry.
    fn probe_down(&self, origin: Vec3, distance: f32) -> bool;
}

/// Probe that never finds ground. Useful for hosts without collision.
#[derive(Default)]
pub struct NoGround;

impl GroundQuery for NoGround {
    fn probe_down(&self, _origin: Vec3, _distance: f32) -> bool {
        false
    }
}

/// Probe against an infinite horizontal plane.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    /// World-space height of the plane's surface.
    pub height: f32,
}

impl GroundQuery for FlatGround {
    fn probe_down(&self, origin: Vec3, distance: f32) -> bool {
        self.height <= origin.y && origin.y - distance <= self.height
    }
}
