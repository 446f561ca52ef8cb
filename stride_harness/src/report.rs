//! Run reports.
//!
//! A replayed tape produces one [`RunReport`]: every footstep and jump with
//! the tick it landed on, plus the final body state. Serialized as pretty
//! JSON for eyeballing and for asserting on in tests.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stride_core::controller::{ControllerState, TickEvents};
use stride_core::surface::Surface;

/// One footstep, as it appeared in the tick stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootstepRecord {
    pub tick: u32,
    pub surface: Surface,
}

/// Summary of one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub scenario: String,
    pub generated_at: DateTime<Utc>,
    pub tick_hz: u32,
    /// Ticks actually simulated, gated or not.
    pub ticks_run: u32,
    /// Ticks the match gate held the controller off.
    pub gated_ticks: u32,
    /// Ticks on which a jump launched.
    pub jumps: Vec<u32>,
    pub footsteps: Vec<FootstepRecord>,
    /// Clip names in playback order.
    pub clips_played: Vec<String>,
    pub final_state: Option<ControllerState>,
}

impl RunReport {
    pub fn new(scenario: &str, tick_hz: u32) -> Self {
        Self {
            scenario: scenario.to_string(),
            generated_at: Utc::now(),
            tick_hz,
            ticks_run: 0,
            gated_ticks: 0,
            jumps: Vec::new(),
            footsteps: Vec::new(),
            clips_played: Vec::new(),
            final_state: None,
        }
    }

    /// Folds one tick's events into the report.
    pub fn record(&mut self, tick: u32, events: &TickEvents) {
        self.ticks_run += 1;
        if events.gated {
            self.gated_ticks += 1;
            return;
        }
        if events.jumped {
            self.jumps.push(tick);
        }
        if let Some(surface) = events.footstep {
            self.footsteps.push(FootstepRecord { tick, surface });
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as JSON.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json).with_context(|| format!("write report {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sorts_events_into_buckets() {
        let mut report = RunReport::new("test", 50);

        report.record(
            0,
            &TickEvents {
                gated: true,
                ..TickEvents::default()
            },
        );
        report.record(
            1,
            &TickEvents {
                grounded: true,
                jumped: true,
                ..TickEvents::default()
            },
        );
        report.record(
            2,
            &TickEvents {
                grounded: true,
                footstep: Some(Surface::Wood),
                ..TickEvents::default()
            },
        );

        assert_eq!(report.ticks_run, 3);
        assert_eq!(report.gated_ticks, 1);
        assert_eq!(report.jumps, vec![1]);
        assert_eq!(report.footsteps.len(), 1);
        assert_eq!(report.footsteps[0].surface, Surface::Wood);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = RunReport::new("json", 50);
        report.record(
            0,
            &TickEvents {
                grounded: true,
                footstep: Some(Surface::Metal),
                ..TickEvents::default()
            },
        );

        let json = report.to_json_string().unwrap();
        assert!(json.contains("\"scenario\": \"json\""));
        assert!(json.contains("metal"));
    }
}
