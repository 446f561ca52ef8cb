//! Controller configuration.
//!
//! Loads tuning from JSON strings/files (file IO left to the host). Every
//! field carries a default matching the stock tuning, so an empty JSON
//! object is a valid config. [`ControllerConfig::validate`] is the fail-fast
//! gate: a controller is only ever built from a validated config.

use std::collections::{HashMap, HashSet};

use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::locomotion::Gait;
use crate::surface::Surface;

/// Root configuration for one character controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Speeds, turn rates, and jump tuning.
    #[serde(default)]
    pub movement: MovementProfile,
    /// Footstep pacing per gait.
    #[serde(default)]
    pub cadence: CadenceProfile,
    /// Ground-probe geometry.
    #[serde(default)]
    pub ground: GroundProfile,
    /// Collision tag to surface classification, e.g. `"WoodSound": "wood"`.
    #[serde(default = "default_surface_tags")]
    pub surface_tags: HashMap<String, Surface>,
    /// Footstep clip names per surface.
    #[serde(default = "default_step_banks")]
    pub step_banks: HashMap<Surface, Vec<String>>,
    /// Seed for footstep clip selection, so a replayed tape picks the same
    /// clips.
    #[serde(default)]
    pub audio_seed: u64,
}

/// Speeds, turn rates, and jump tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementProfile {
    /// Ground speed while walking, units/s.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Ground speed while sprinting, units/s.
    #[serde(default = "default_run_speed")]
    pub run_speed: f32,
    /// Upward velocity applied by a jump, units/s.
    #[serde(default = "default_jump_velocity")]
    pub jump_velocity: f32,
    /// Yaw rate at full look deflection, degrees/s.
    #[serde(default = "default_turn_rate")]
    pub turn_rate_yaw: f32,
    /// Pitch rate at full look deflection, degrees/s.
    #[serde(default = "default_turn_rate")]
    pub turn_rate_pitch: f32,
}

/// Footstep pacing per gait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceProfile {
    /// Seconds between footsteps while walking.
    #[serde(default = "default_walk_interval")]
    pub walk_interval: f32,
    /// Seconds between footsteps while sprinting.
    #[serde(default = "default_run_interval")]
    pub run_interval: f32,
}

/// Ground-probe geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundProfile {
    /// Length of the downward probe from the body origin.
    #[serde(default = "default_probe_distance")]
    pub probe_distance: f32,
    /// Upward nudge applied just before the jump impulse, so the probe stops
    /// seeing the floor on the same tick.
    #[serde(default = "default_jump_nudge")]
    pub jump_nudge: f32,
}

fn default_walk_speed() -> f32 {
    5.0
}

fn default_run_speed() -> f32 {
    10.0
}

fn default_jump_velocity() -> f32 {
    10.0
}

fn default_turn_rate() -> f32 {
    150.0
}

fn default_walk_interval() -> f32 {
    0.5
}

fn default_run_interval() -> f32 {
    0.2
}

fn default_probe_distance() -> f32 {
    1.005
}

fn default_jump_nudge() -> f32 {
    0.25
}

fn default_surface_tags() -> HashMap<String, Surface> {
    let mut tags = HashMap::new();
    tags.insert("WoodSound".to_string(), Surface::Wood);
    tags.insert("MetalSound".to_string(), Surface::Metal);
    tags
}

fn default_step_banks() -> HashMap<Surface, Vec<String>> {
    let mut banks = HashMap::new();
    banks.insert(
        Surface::Wood,
        vec![
            "wood_step_01".to_string(),
            "wood_step_02".to_string(),
            "wood_step_03".to_string(),
        ],
    );
    banks.insert(
        Surface::Metal,
        vec![
            "metal_step_01".to_string(),
            "metal_step_02".to_string(),
            "metal_step_03".to_string(),
        ],
    );
    banks
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            movement: MovementProfile::default(),
            cadence: CadenceProfile::default(),
            ground: GroundProfile::default(),
            surface_tags: default_surface_tags(),
            step_banks: default_step_banks(),
            audio_seed: 0,
        }
    }
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self {
            walk_speed: default_walk_speed(),
            run_speed: default_run_speed(),
            jump_velocity: default_jump_velocity(),
            turn_rate_yaw: default_turn_rate(),
            turn_rate_pitch: default_turn_rate(),
        }
    }
}

impl Default for CadenceProfile {
    fn default() -> Self {
        Self {
            walk_interval: default_walk_interval(),
            run_interval: default_run_interval(),
        }
    }
}

impl Default for GroundProfile {
    fn default() -> Self {
        Self {
            probe_distance: default_probe_distance(),
            jump_nudge: default_jump_nudge(),
        }
    }
}

impl MovementProfile {
    /// Ground speed for the given gait.
    pub fn speed(&self, gait: Gait) -> f32 {
        match gait {
            Gait::Walk => self.walk_speed,
            Gait::Run => self.run_speed,
        }
    }
}

impl CadenceProfile {
    /// Footstep interval for the given gait.
    pub fn interval(&self, gait: Gait) -> f32 {
        match gait {
            Gait::Walk => self.walk_interval,
            Gait::Run => self.run_interval,
        }
    }
}

impl ControllerConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Checks tuning invariants, failing on the first violation.
    ///
    /// Surfaces that are mapped from a tag but have no usable footstep bank
    /// are not an error; they are logged once here and stay silent at
    /// playback.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("walk_speed", self.movement.walk_speed),
            ("run_speed", self.movement.run_speed),
            ("jump_velocity", self.movement.jump_velocity),
            ("turn_rate_yaw", self.movement.turn_rate_yaw),
            ("turn_rate_pitch", self.movement.turn_rate_pitch),
            ("walk_interval", self.cadence.walk_interval),
            ("run_interval", self.cadence.run_interval),
            ("probe_distance", self.ground.probe_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be positive and finite, got {value}");
            }
        }
        if !self.ground.jump_nudge.is_finite() || self.ground.jump_nudge < 0.0 {
            bail!(
                "jump_nudge must be non-negative and finite, got {}",
                self.ground.jump_nudge
            );
        }
        for (surface, bank) in &self.step_banks {
            if bank.iter().any(|clip| clip.is_empty()) {
                bail!("step bank for {surface:?} contains an empty clip name");
            }
        }

        let mapped: HashSet<Surface> = self.surface_tags.values().copied().collect();
        for surface in mapped {
            if surface == Surface::Unknown {
                continue;
            }
            let usable = self.step_banks.get(&surface).is_some_and(|b| !b.is_empty());
            if !usable {
                warn!(?surface, "surface is mapped from a tag but has no footstep bank; steps on it will be silent");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let cfg = ControllerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.movement.walk_speed, 5.0);
        assert_eq!(cfg.movement.run_speed, 10.0);
        assert_eq!(cfg.cadence.walk_interval, 0.5);
        assert_eq!(cfg.cadence.run_interval, 0.2);
        assert_eq!(cfg.ground.probe_distance, 1.005);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = ControllerConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg.movement.jump_velocity, 10.0);
        assert_eq!(cfg.surface_tags.get("WoodSound"), Some(&Surface::Wood));
        assert!(cfg.step_banks.contains_key(&Surface::Metal));
    }

    #[test]
    fn partial_json_overrides_one_field() {
        let cfg =
            ControllerConfig::from_json_str(r#"{"movement": {"run_speed": 12.5}}"#).unwrap();
        assert_eq!(cfg.movement.run_speed, 12.5);
        assert_eq!(cfg.movement.walk_speed, 5.0);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut cfg = ControllerConfig::default();
        cfg.movement.walk_speed = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_interval() {
        let mut cfg = ControllerConfig::default();
        cfg.cadence.run_interval = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_bank_is_not_an_error() {
        let mut cfg = ControllerConfig::default();
        cfg.step_banks.remove(&Surface::Metal);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn gait_accessors_pick_matching_tuning() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.movement.speed(Gait::Walk), 5.0);
        assert_eq!(cfg.movement.speed(Gait::Run), 10.0);
        assert_eq!(cfg.cadence.interval(Gait::Walk), 0.5);
        assert_eq!(cfg.cadence.interval(Gait::Run), 0.2);
    }
}
