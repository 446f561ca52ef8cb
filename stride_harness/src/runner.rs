//! Scenario runner.
//!
//! Wires one controller to the flat-floor world, replays a tape against it,
//! and collects the run report. Delivery order within a tick is fixed:
//! scripted actions first, then the controller tick, then world
//! integration, whose landing contacts arrive on the next tick.

use std::sync::{Arc, Mutex};

use tracing::debug;

use stride_core::audio::RecordingSink;
use stride_core::controller::{CharacterController, ControllerPorts};
use stride_core::gate::SharedMatchState;

use crate::report::RunReport;
use crate::scenario::{Action, Scenario, TimedAction};
use crate::world::World;

/// Replays a scenario from start to finish.
pub fn run(scenario: &Scenario) -> anyhow::Result<RunReport> {
    scenario.validate()?;

    let gate = SharedMatchState::new();
    let mut world = World::new(scenario.floor.height, scenario.floor.tag.clone());
    let clips = Arc::new(Mutex::new(RecordingSink::default()));

    let (mut controller, ports) = CharacterController::spawn(
        scenario.config.clone(),
        scenario.spawn,
        Box::new(world.ground()),
        Box::new(gate.clone()),
        Box::new(Arc::clone(&clips)),
    )?;

    let mut actions: Vec<&TimedAction> = scenario.actions.iter().collect();
    actions.sort_by_key(|a| a.tick);
    let mut next_action = 0;

    let dt = scenario.dt();
    let mut report = RunReport::new(&scenario.name, scenario.tick_hz);

    for tick in 0..scenario.ticks {
        while next_action < actions.len() && actions[next_action].tick <= tick {
            apply(&actions[next_action].action, &ports, &gate);
            next_action += 1;
        }

        let events = controller.tick(dt);
        if events.jumped || events.footstep.is_some() {
            debug!(tick, ?events, "Tick events");
        }
        report.record(tick, &events);

        if let Some(tag) = world.integrate(controller.body_mut(), dt) {
            ports.contact.deliver(tag);
        }
    }

    report.clips_played = clips.lock().unwrap().played.clone();
    report.final_state = Some(controller.state());
    Ok(report)
}

fn apply(action: &Action, ports: &ControllerPorts, gate: &SharedMatchState) {
    match action {
        Action::Input(event) => {
            ports.input.deliver(*event);
        }
        Action::Contact { tag } => {
            ports.contact.deliver(tag);
        }
        Action::SetReady(ready) => gate.set_ready(*ready),
        Action::SetWon(won) => gate.set_won(*won),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tape_runs_to_completion() {
        let report = run(&Scenario::demo()).unwrap();
        assert_eq!(report.ticks_run, 300);
        assert!(!report.footsteps.is_empty());
        assert_eq!(report.jumps.len(), 1);
        assert!(report.gated_ticks > 0);
        assert!(report.final_state.is_some());
    }
}
