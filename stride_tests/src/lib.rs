//! `stride_tests`
//!
//! Cross-crate integration tests, plus the shared rig they run on: a
//! controller over a flat wood floor with a live match gate and a
//! recording audio sink.

use std::sync::{Arc, Mutex};

use stride_core::audio::RecordingSink;
use stride_core::config::ControllerConfig;
use stride_core::controller::{CharacterController, ControllerPorts, SpawnPoint};
use stride_core::gate::SharedMatchState;
use stride_core::ground::FlatGround;
use stride_core::math::Vec3;

/// A wired-up controller ready for tick-by-tick property tests.
pub struct Rig {
    pub controller: CharacterController,
    pub ports: ControllerPorts,
    pub gate: SharedMatchState,
    pub clips: Arc<Mutex<RecordingSink>>,
}

impl Rig {
    /// Grounded on a floor at height zero, gate already live.
    pub fn grounded() -> anyhow::Result<Self> {
        Self::build(ControllerConfig::default(), SpawnPoint::default())
    }

    /// Spawned high above the floor, out of probe reach.
    pub fn airborne() -> anyhow::Result<Self> {
        Self::build(
            ControllerConfig::default(),
            SpawnPoint {
                position: Vec3::new(0.0, 10.0, 0.0),
                yaw_deg: 0.0,
            },
        )
    }

    pub fn with_config(config: ControllerConfig) -> anyhow::Result<Self> {
        Self::build(config, SpawnPoint::default())
    }

    fn build(config: ControllerConfig, spawn: SpawnPoint) -> anyhow::Result<Self> {
        let gate = SharedMatchState::new();
        gate.set_ready(true);
        let clips = Arc::new(Mutex::new(RecordingSink::default()));
        let (controller, ports) = CharacterController::spawn(
            config,
            spawn,
            Box::new(FlatGround { height: 0.0 }),
            Box::new(gate.clone()),
            Box::new(Arc::clone(&clips)),
        )?;
        Ok(Self {
            controller,
            ports,
            gate,
            clips,
        })
    }

    /// Clip names played so far.
    pub fn played(&self) -> Vec<String> {
        self.clips.lock().unwrap().played.clone()
    }
}
