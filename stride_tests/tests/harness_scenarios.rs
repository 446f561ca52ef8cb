//! Full tape replays through the harness: scenario -> runner -> world.

use stride_core::config::ControllerConfig;
use stride_core::controller::SpawnPoint;
use stride_core::input::InputEvent;
use stride_core::math::{Vec2, Vec3};
use stride_core::surface::Surface;
use stride_harness::runner;
use stride_harness::scenario::{Action, Floor, Scenario, TimedAction};

fn walk_tape(ticks: u32) -> Scenario {
    Scenario {
        name: "walk".to_string(),
        // 1/32s steps are exactly representable, so the cadence ladder
        // lands on the same ticks every run.
        tick_hz: 32,
        ticks,
        floor: Floor::default(),
        spawn: SpawnPoint::default(),
        config: ControllerConfig::default(),
        actions: vec![
            TimedAction {
                tick: 0,
                action: Action::SetReady(true),
            },
            TimedAction {
                tick: 0,
                action: Action::Input(InputEvent::MovementPerformed(Vec2::new(0.0, 1.0))),
            },
        ],
    }
}

/// Steady walking: one landing step, then one step per walk interval.
#[test]
fn walking_produces_the_exact_step_ladder() -> anyhow::Result<()> {
    let report = runner::run(&walk_tape(160))?;

    let ticks: Vec<u32> = report.footsteps.iter().map(|f| f.tick).collect();
    assert_eq!(
        ticks,
        vec![1, 15, 31, 47, 63, 79, 95, 111, 127, 143, 159],
        "landing step then every 16 ticks at 32 Hz"
    );
    assert!(report
        .footsteps
        .iter()
        .all(|f| f.surface == Surface::Wood));
    assert_eq!(report.clips_played.len(), report.footsteps.len());
    assert!(report.clips_played.iter().all(|c| c.starts_with("wood_step")));
    Ok(())
}

/// The built-in demo: walk, sprint, one jump, a quiet flight, a landing
/// step, a metal plate, then a gated tail.
#[test]
fn demo_tape_tells_the_whole_story() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();

    let scenario = Scenario::demo();
    let report = runner::run(&scenario)?;

    assert_eq!(report.ticks_run, 300);
    assert_eq!(report.jumps, vec![150]);
    assert_eq!(report.gated_ticks, 20);

    // First step is the landing contact right after spawn.
    assert_eq!(report.footsteps[0].tick, 1);
    assert_eq!(report.footsteps[0].surface, Surface::Wood);

    // Airborne stretch after the jump stays quiet until touchdown.
    assert!(
        !report
            .footsteps
            .iter()
            .any(|f| (152..=248).contains(&f.tick)),
        "no footsteps mid-flight"
    );
    assert!(
        report
            .footsteps
            .iter()
            .any(|f| (249..=258).contains(&f.tick) && f.surface == Surface::Wood),
        "landing should produce an immediate wood step"
    );

    // The scripted metal plate is contact-driven, so its tick is exact.
    assert!(report
        .footsteps
        .iter()
        .any(|f| f.tick == 265 && f.surface == Surface::Metal));
    assert!(report
        .clips_played
        .last()
        .is_some_and(|c| c.starts_with("metal_step")));

    let final_state = report.final_state.expect("final state recorded");
    assert_eq!(final_state.surface, Surface::Metal);
    assert_eq!(final_state.velocity, Vec3::ZERO);
    assert_eq!(final_state.position.y, 1.0);
    Ok(())
}

/// Without a ready flag the whole tape runs gated: no motion, no sound.
#[test]
fn unready_tape_never_moves() -> anyhow::Result<()> {
    let mut scenario = walk_tape(100);
    scenario.name = "unready".to_string();
    scenario.actions.retain(|a| a.action != Action::SetReady(true));

    let report = runner::run(&scenario)?;

    assert_eq!(report.gated_ticks, 100);
    assert!(report.footsteps.is_empty());
    assert!(report.clips_played.is_empty());
    assert!(report.jumps.is_empty());

    let final_state = report.final_state.expect("final state recorded");
    assert_eq!(final_state.position, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(final_state.surface, Surface::Unknown);
    Ok(())
}

/// A JSON tape with tuning overrides and a metal floor, end to end.
#[test]
fn json_tape_with_overrides_replays_deterministically() -> anyhow::Result<()> {
    let json = r#"{
        "name": "metal_sprint",
        "tick_hz": 32,
        "ticks": 40,
        "floor": {"tag": "MetalSound"},
        "config": {"movement": {"run_speed": 8.0}},
        "actions": [
            {"tick": 0, "action": {"SetReady": true}},
            {"tick": 0, "action": {"Input": {"MovementPerformed": {"x": 0.0, "y": 1.0}}}},
            {"tick": 0, "action": {"Input": "SprintPressed"}}
        ]
    }"#;

    let scenario = Scenario::from_json_str(json)?;
    let report = runner::run(&scenario)?;

    assert!(!report.footsteps.is_empty());
    assert!(report
        .footsteps
        .iter()
        .all(|f| f.surface == Surface::Metal));
    assert!(report
        .clips_played
        .iter()
        .all(|c| c.starts_with("metal_step")));

    let final_state = report.final_state.expect("final state recorded");
    assert_eq!(final_state.velocity, Vec3::new(0.0, 0.0, 8.0));
    Ok(())
}
