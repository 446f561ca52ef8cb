//! Flat-floor host world.
//!
//! The smallest world that exercises everything the controller needs from a
//! host: a ground probe, gravity and forward-Euler integration, and
//! contact-begin reports when the body lands. The floor is an infinite
//! plane carrying one collision tag.

use stride_core::controller::Body;
use stride_core::ground::FlatGround;

/// Downward acceleration applied while airborne.
pub const GRAVITY: f32 = 9.81;

/// Rest height of the body origin above the floor surface. The default
/// probe length of 1.005 reaches the floor from here with a little slack.
pub const BODY_CLEARANCE: f32 = 1.0;

const LIFTOFF_EPS: f32 = 1e-4;

pub struct World {
    floor_height: f32,
    floor_tag: String,
    on_floor: bool,
}

impl World {
    pub fn new(floor_height: f32, floor_tag: impl Into<String>) -> Self {
        Self {
            floor_height,
            floor_tag: floor_tag.into(),
            on_floor: false,
        }
    }

    /// The probe the controller should be spawned with.
    pub fn ground(&self) -> FlatGround {
        FlatGround {
            height: self.floor_height,
        }
    }

    pub fn floor_tag(&self) -> &str {
        &self.floor_tag
    }

    /// Advances the body one step: gravity, position, floor clamp.
    ///
    /// Returns the floor's tag when this step began a new contact, which
    /// the caller forwards to the controller's contact port. Resting on the
    /// floor reports nothing; only the landing edge does.
    pub fn integrate(&mut self, body: &mut Body, dt: f32) -> Option<&str> {
        let rest = self.floor_height + BODY_CLEARANCE;

        body.velocity.y -= GRAVITY * dt;
        body.position += body.velocity * dt;

        if body.position.y <= rest {
            body.position.y = rest;
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
            if !self.on_floor {
                self.on_floor = true;
                return Some(&self.floor_tag);
            }
        } else if body.position.y > rest + LIFTOFF_EPS {
            self.on_floor = false;
        }
        None
    }
}
