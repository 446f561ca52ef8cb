//! Footstep pacing.
//!
//! A two-state timer: movement intent toggles Idle/Walking, and the timer
//! advances only while Walking and grounded. Airborne stretches pause the
//! count rather than banking a step for landing, and idle stretches freeze
//! it, so the accumulator resets only when a step actually fires.

/// Pacing state, driven by movement intent rather than actual velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Idle,
    Walking,
}

/// Footstep timer.
#[derive(Debug)]
pub struct FootstepCadence {
    pace: Pace,
    accumulated: f32,
}

impl FootstepCadence {
    pub fn new() -> Self {
        Self {
            pace: Pace::Idle,
            accumulated: 0.0,
        }
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    /// Seconds accumulated toward the next step.
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Advances one tick and reports whether a step is due.
    ///
    /// The interval is read live each tick, so a mid-stride gait change
    /// takes effect at the very next comparison without rescaling what has
    /// already accumulated.
    pub fn advance(&mut self, move_intent: bool, grounded: bool, interval: f32, dt: f32) -> bool {
        self.pace = if move_intent { Pace::Walking } else { Pace::Idle };
        if self.pace != Pace::Walking || !grounded {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated >= interval {
            self.accumulated = 0.0;
            return true;
        }
        false
    }
}

impl Default for FootstepCadence {
    fn default() -> Self {
        Self::new()
    }
}
