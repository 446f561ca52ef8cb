//! First-person view state.
//!
//! Yaw lives on the body and steers the locomotion basis; pitch lives on the
//! camera alone and never tilts movement. The pitch accumulator stores the
//! clamped value back, so holding the stick at a limit saturates instead of
//! winding up, and reversing the stick responds on the very next tick.

use crate::config::MovementProfile;
use crate::math::Vec2;

/// Camera pitch clamp, degrees. Negative pitch looks up.
pub const PITCH_MIN_DEG: f32 = -90.0;
pub const PITCH_MAX_DEG: f32 = 90.0;

/// Body yaw plus camera pitch, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    /// Body heading. Accumulates without bound; consumers take sin/cos.
    pub yaw_deg: f32,
    /// Camera pitch in `[PITCH_MIN_DEG, PITCH_MAX_DEG]`.
    pub pitch_deg: f32,
}

impl ViewState {
    pub fn new(yaw_deg: f32) -> Self {
        Self {
            yaw_deg,
            pitch_deg: 0.0,
        }
    }

    /// Integrates one tick of look input.
    pub fn integrate(&mut self, movement: &MovementProfile, look: Vec2, dt: f32) {
        self.yaw_deg += look.x * movement.turn_rate_yaw * dt;
        self.pitch_deg -= look.y * movement.turn_rate_pitch * dt;
        self.pitch_deg = self.pitch_deg.clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);
    }
}
