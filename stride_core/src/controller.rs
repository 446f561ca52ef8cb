//! Character controller assembly.
//!
//! One controller owns:
//! - A live input binding and a live contact binding (released on drop)
//! - The body's position, velocity, and view angles
//! - The per-tick ground probe result, taken once and reused everywhere
//! - Footstep pacing and playback
//!
//! The host drives it with [`CharacterController::tick`] once per fixed
//! timestep and integrates the body in between; the controller itself never
//! applies gravity or advances position.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::audio::{FootstepPlayer, StepSink};
use crate::cadence::FootstepCadence;
use crate::camera::ViewState;
use crate::config::ControllerConfig;
use crate::gate::MatchState;
use crate::ground::GroundQuery;
use crate::input::{InputBinding, InputPort};
use crate::locomotion::{ground_velocity, launch_jump, Gait};
use crate::math::Vec3;
use crate::surface::{ContactBinding, ContactPort, Surface, SurfaceMap};

/// Rigid-body mirror the controller steers. The host's integrator advances
/// it between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Where a character enters the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Vec3,
    pub yaw_deg: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            yaw_deg: 0.0,
        }
    }
}

/// Host-side event endpoints for one controller.
pub struct ControllerPorts {
    pub input: InputPort,
    pub contact: ContactPort,
}

/// What one tick produced, for hosts that mirror effects outward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickEvents {
    /// The match gate held the controller off; all other fields are unset.
    pub gated: bool,
    /// Probe result this tick ran under.
    pub grounded: bool,
    /// A jump launched this tick.
    pub jumped: bool,
    /// A footstep fired this tick, keyed by the surface it fired on.
    /// Playback may still be silent if that surface has no bank.
    pub footstep: Option<Surface>,
}

/// Point-in-time view of the whole controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub grounded: bool,
    pub surface: Surface,
}

/// First-person character controller.
pub struct CharacterController {
    config: ControllerConfig,
    input: InputBinding,
    contact: ContactBinding,
    ground: Box<dyn GroundQuery>,
    match_state: Box<dyn MatchState>,
    footsteps: FootstepPlayer,
    cadence: FootstepCadence,
    view: ViewState,
    body: Body,
    grounded: bool,
    surface: Surface,
    control_live: bool,
}

impl CharacterController {
    /// Validates the config, wires up ports, and places the body at the
    /// spawn point. The returned ports are the host's delivery endpoints.
    pub fn spawn(
        config: ControllerConfig,
        spawn: SpawnPoint,
        ground: Box<dyn GroundQuery>,
        match_state: Box<dyn MatchState>,
        sink: Box<dyn StepSink>,
    ) -> Result<(Self, ControllerPorts)> {
        config.validate()?;

        let input = InputPort::new();
        let contact = ContactPort::new(SurfaceMap::new(config.surface_tags.clone()));
        let input_binding = input.bind();
        let contact_binding = contact.bind();
        let footsteps = FootstepPlayer::new(config.step_banks.clone(), config.audio_seed, sink);

        info!(position = ?spawn.position, yaw = spawn.yaw_deg, "Character spawned");

        let controller = Self {
            config,
            input: input_binding,
            contact: contact_binding,
            ground,
            match_state,
            footsteps,
            cadence: FootstepCadence::new(),
            view: ViewState::new(spawn.yaw_deg),
            body: Body {
                position: spawn.position,
                velocity: Vec3::ZERO,
            },
            grounded: false,
            surface: Surface::Unknown,
            control_live: false,
        };

        Ok((controller, ControllerPorts { input, contact }))
    }

    /// Advances one fixed timestep.
    ///
    /// While the match gate is off, pending pulses are drained so a stale
    /// jump press or contact cannot fire on reactivation, and everything
    /// else freezes in place.
    pub fn tick(&mut self, dt: f32) -> TickEvents {
        let live = self.match_state.control_active();
        if live != self.control_live {
            info!(live, "Control gate flipped");
            self.control_live = live;
        }
        if !live {
            let _ = self.input.sample();
            let _ = self.contact.take();
            return TickEvents {
                gated: true,
                ..TickEvents::default()
            };
        }

        let mut events = TickEvents::default();
        let sample = self.input.sample();
        let contact = self.contact.take();

        // One probe per tick; every consumer below reuses this answer.
        self.grounded = self
            .ground
            .probe_down(self.body.position, self.config.ground.probe_distance);
        events.grounded = self.grounded;

        let gait = Gait::from_sprint(sample.sprint_held);

        if self.grounded {
            self.body.velocity = ground_velocity(
                &self.config.movement,
                gait,
                self.view.yaw_deg,
                sample.move_axis,
            );
        }

        if sample.jump_pulse {
            if self.grounded {
                launch_jump(
                    &mut self.body.position,
                    &mut self.body.velocity,
                    &self.config.movement,
                    &self.config.ground,
                );
                events.jumped = true;
                debug!(velocity = ?self.body.velocity, "Jump");
            } else {
                debug!("Jump pulse ignored while airborne");
            }
        }

        self.view
            .integrate(&self.config.movement, sample.look_axis, dt);

        if let Some(report) = contact {
            self.surface = report.surface;
            debug!(surface = ?self.surface, "Surface classified");
            if self.grounded {
                events.footstep = Some(self.surface);
                self.footsteps.play_step(self.surface);
            }
        }

        let interval = self.config.cadence.interval(gait);
        if self
            .cadence
            .advance(sample.move_intent, self.grounded, interval, dt)
        {
            events.footstep = Some(self.surface);
            self.footsteps.play_step(self.surface);
        }

        events
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Probe result of the most recent live tick.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Current surface classification, from the latest contact.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            position: self.body.position,
            velocity: self.body.velocity,
            yaw_deg: self.view.yaw_deg,
            pitch_deg: self.view.pitch_deg,
            grounded: self.grounded,
            surface: self.surface,
        }
    }
}
