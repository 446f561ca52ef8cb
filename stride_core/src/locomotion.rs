//! Ground locomotion.
//!
//! Velocity is authored, not accumulated: while grounded the controller
//! overwrites the body's full velocity from the movement axis each tick,
//! which also zeroes any vertical component. Airborne ticks leave velocity
//! alone so the host's gravity and momentum play out untouched.
//!
//! The axis is deliberately not normalized; diagonal input runs faster, as
//! the stock tuning expects.

use serde::{Deserialize, Serialize};

use crate::config::{GroundProfile, MovementProfile};
use crate::math::{yaw_basis_deg, Vec2, Vec3};

/// Movement gait. Selected from the sprint latch once per tick, and both
/// ground speed and footstep interval derive from that one value, so the
/// two can never disagree within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gait {
    Walk,
    Run,
}

impl Gait {
    pub fn from_sprint(sprint_held: bool) -> Self {
        if sprint_held {
            Gait::Run
        } else {
            Gait::Walk
        }
    }
}

/// Full replacement velocity for a grounded body.
///
/// `forward * (speed * axis.y) + right * (speed * axis.x)`, with the basis
/// taken from the body's yaw. Zero axis yields exactly zero velocity.
pub fn ground_velocity(
    movement: &MovementProfile,
    gait: Gait,
    yaw_deg: f32,
    axis: Vec2,
) -> Vec3 {
    let (forward, right) = yaw_basis_deg(yaw_deg);
    let speed = movement.speed(gait);
    forward * (speed * axis.y) + right * (speed * axis.x)
}

/// Launches a grounded jump: lifts the body clear of the probe, then adds
/// the jump impulse to the current velocity.
pub fn launch_jump(
    position: &mut Vec3,
    velocity: &mut Vec3,
    movement: &MovementProfile,
    ground: &GroundProfile,
) {
    position.y += ground.jump_nudge;
    velocity.y += movement.jump_velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_axis_yields_zero_velocity() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Walk, 37.0, Vec2::ZERO);
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn full_forward_walk_moves_at_walk_speed() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Walk, 0.0, Vec2::new(0.0, 1.0));
        assert!((v.z - movement.walk_speed).abs() < 1e-5);
        assert!(v.x.abs() < 1e-5);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn run_gait_uses_run_speed() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Run, 0.0, Vec2::new(0.0, 1.0));
        assert!((v.z - movement.run_speed).abs() < 1e-5);
    }

    #[test]
    fn yaw_rotates_the_basis() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Walk, 90.0, Vec2::new(0.0, 1.0));
        assert!((v.x - movement.walk_speed).abs() < 1e-4);
        assert!(v.z.abs() < 1e-4);
    }

    #[test]
    fn diagonal_axis_is_not_normalized() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Walk, 0.0, Vec2::new(1.0, 1.0));
        let expected_sq = 2.0 * movement.walk_speed * movement.walk_speed;
        assert!((v.len_sq() - expected_sq).abs() < 1e-3);
    }

    #[test]
    fn overwrite_always_zeroes_vertical() {
        let movement = MovementProfile::default();
        let v = ground_velocity(&movement, Gait::Run, 213.0, Vec2::new(-0.3, 0.8));
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn launch_jump_adds_impulse_and_nudge() {
        let movement = MovementProfile::default();
        let ground = GroundProfile::default();
        let mut position = Vec3::new(2.0, 1.0, -4.0);
        let mut velocity = Vec3::new(3.0, 0.0, 0.0);

        launch_jump(&mut position, &mut velocity, &movement, &ground);

        assert!((position.y - 1.25).abs() < 1e-6);
        assert!((velocity.y - movement.jump_velocity).abs() < 1e-6);
        assert_eq!(velocity.x, 3.0);
    }

    #[test]
    fn gait_follows_sprint_latch() {
        assert_eq!(Gait::from_sprint(false), Gait::Walk);
        assert_eq!(Gait::from_sprint(true), Gait::Run);
    }
}
