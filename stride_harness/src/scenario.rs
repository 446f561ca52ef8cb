//! Scenario tapes.
//!
//! A scenario is a deterministic script for one run: a fixed timestep, a
//! flat floor with one collision tag, controller tuning, and a list of
//! timed directives. Replaying the same tape yields the same report.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::warn;

use stride_core::config::ControllerConfig;
use stride_core::controller::SpawnPoint;
use stride_core::input::InputEvent;
use stride_core::math::Vec2;

/// One scripted directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Deliver a device event to the input port.
    Input(InputEvent),
    /// Report a contact-begin with this collision tag, as if the body
    /// touched a prop mid-run.
    Contact { tag: String },
    /// Flip the player-ready flag on the match gate.
    SetReady(bool),
    /// Flip the player-won flag on the match gate.
    SetWon(bool),
}

/// A directive applied just before the named tick runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedAction {
    pub tick: u32,
    pub action: Action,
}

/// The world's single walkable plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Surface height of the plane.
    #[serde(default)]
    pub height: f32,
    /// Collision tag reported when the body lands on it.
    #[serde(default = "default_floor_tag")]
    pub tag: String,
}

fn default_floor_tag() -> String {
    "WoodSound".to_string()
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            height: 0.0,
            tag: default_floor_tag(),
        }
    }
}

/// A full scripted run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Name for logs and the report.
    pub name: String,
    /// Fixed timestep rate.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
    /// Total ticks to simulate.
    pub ticks: u32,
    #[serde(default)]
    pub floor: Floor,
    #[serde(default)]
    pub spawn: SpawnPoint,
    #[serde(default)]
    pub config: ControllerConfig,
    #[serde(default)]
    pub actions: Vec<TimedAction>,
}

fn default_tick_hz() -> u32 {
    50
}

impl Scenario {
    /// Parses a scenario from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Loads a scenario file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read scenario {}", path.display()))?;
        let scenario = Self::from_json_str(&text)
            .with_context(|| format!("parse scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the tape is runnable.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ticks == 0 {
            bail!("scenario runs zero ticks");
        }
        if self.tick_hz == 0 {
            bail!("tick_hz must be positive");
        }
        self.config.validate()?;
        for timed in &self.actions {
            if timed.tick >= self.ticks {
                warn!(
                    tick = timed.tick,
                    ticks = self.ticks,
                    "action lies past the end of the tape and will never apply"
                );
            }
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    /// A built-in tape exercising the whole controller: walk, sprint, jump,
    /// stop, step onto a metal plate, then lose control when the round ends.
    pub fn demo() -> Self {
        let actions = vec![
            TimedAction {
                tick: 0,
                action: Action::SetReady(true),
            },
            TimedAction {
                tick: 5,
                action: Action::Input(InputEvent::MovementPerformed(Vec2::new(0.0, 1.0))),
            },
            TimedAction {
                tick: 100,
                action: Action::Input(InputEvent::SprintPressed),
            },
            TimedAction {
                tick: 150,
                action: Action::Input(InputEvent::JumpPressed),
            },
            TimedAction {
                tick: 200,
                action: Action::Input(InputEvent::SprintReleased),
            },
            TimedAction {
                tick: 260,
                action: Action::Input(InputEvent::MovementCanceled),
            },
            TimedAction {
                tick: 265,
                action: Action::Contact {
                    tag: "MetalSound".to_string(),
                },
            },
            TimedAction {
                tick: 280,
                action: Action::SetWon(true),
            },
        ];
        Self {
            name: "demo".to_string(),
            tick_hz: default_tick_hz(),
            ticks: 300,
            floor: Floor::default(),
            spawn: SpawnPoint::default(),
            config: ControllerConfig::default(),
            actions,
        }
    }
}
