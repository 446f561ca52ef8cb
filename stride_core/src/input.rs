//! Input state and scoped bindings.
//!
//! The host's input layer pushes edge events through an [`InputPort`]; the
//! controller reads them through the [`InputBinding`] returned by
//! [`InputPort::bind`]. Delivery applies each event to the bound state
//! immediately (latest value wins, pulses latch); nothing is queued between
//! ticks. Dropping the binding detaches it deterministically, after which
//! delivery is a no-op — there is no way to invoke a dangling handler.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::Vec2;

/// A device edge event, as forwarded by the host's binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Movement axis engaged or changed; carries the new axis value.
    MovementPerformed(Vec2),
    /// Movement axis released.
    MovementCanceled,
    /// Look axis moved; carries the device delta.
    LookPerformed(Vec2),
    /// Look axis released.
    LookCanceled,
    /// Jump pressed. A one-frame pulse, consumed exactly once.
    JumpPressed,
    /// Sprint engaged.
    SprintPressed,
    /// Sprint released.
    SprintReleased,
}

/// The input state visible to one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Movement axis, clamped to [-1, 1]² on ingest.
    pub move_axis: Vec2,
    /// Look axis in device-delta units (unclamped).
    pub look_axis: Vec2,
    /// Sprint latch; held selects the run gait.
    pub sprint_held: bool,
    /// True exactly once per jump press.
    pub jump_pulse: bool,
    /// Movement intent, edge-driven by performed/canceled events rather than
    /// by actual velocity.
    pub move_intent: bool,
}

#[derive(Debug, Default)]
struct Shared {
    bound: Option<u64>,
    next_id: u64,
    move_axis: Vec2,
    look_axis: Vec2,
    sprint_held: bool,
    jump_pulse: bool,
    move_intent: bool,
}

impl Shared {
    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::MovementPerformed(axis) => {
                let axis = axis.clamped_unit();
                self.move_axis = axis;
                self.move_intent = axis != Vec2::ZERO;
            }
            InputEvent::MovementCanceled => {
                self.move_axis = Vec2::ZERO;
                self.move_intent = false;
            }
            InputEvent::LookPerformed(delta) => self.look_axis = delta,
            InputEvent::LookCanceled => self.look_axis = Vec2::ZERO,
            InputEvent::JumpPressed => self.jump_pulse = true,
            InputEvent::SprintPressed => self.sprint_held = true,
            InputEvent::SprintReleased => self.sprint_held = false,
        }
    }

    fn reset_events(&mut self) {
        self.move_axis = Vec2::ZERO;
        self.look_axis = Vec2::ZERO;
        self.sprint_held = false;
        self.jump_pulse = false;
        self.move_intent = false;
    }
}

/// Host-side endpoint: the delivery point for device events.
pub struct InputPort {
    shared: Arc<Mutex<Shared>>,
}

/// Controller-side endpoint. Detaches its port when dropped.
pub struct InputBinding {
    shared: Arc<Mutex<Shared>>,
    id: u64,
}

impl InputPort {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    /// Attaches a fresh binding, starting from a cleared input state.
    ///
    /// A port feeds at most one binding; binding again supersedes the
    /// previous guard, whose later drop is then inert.
    pub fn bind(&self) -> InputBinding {
        let mut s = self.shared.lock().unwrap();
        let id = s.next_id;
        s.next_id += 1;
        s.bound = Some(id);
        s.reset_events();
        InputBinding {
            shared: Arc::clone(&self.shared),
            id,
        }
    }

    /// Applies an event to the bound state.
    ///
    /// Returns false when no binding is live; the event is dropped.
    pub fn deliver(&self, event: InputEvent) -> bool {
        let mut s = self.shared.lock().unwrap();
        if s.bound.is_none() {
            debug!(?event, "input event dropped, no live binding");
            return false;
        }
        s.apply(event);
        true
    }
}

impl Default for InputPort {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBinding {
    /// Reads the current sample, consuming one-frame pulses.
    pub fn sample(&self) -> InputSample {
        let mut s = self.shared.lock().unwrap();
        let sample = InputSample {
            move_axis: s.move_axis,
            look_axis: s.look_axis,
            sprint_held: s.sprint_held,
            jump_pulse: s.jump_pulse,
            move_intent: s.move_intent,
        };
        s.jump_pulse = false;
        sample
    }
}

impl Drop for InputBinding {
    fn drop(&mut self) {
        if let Ok(mut s) = self.shared.lock() {
            if s.bound == Some(self.id) {
                s.bound = None;
            }
        }
    }
}
