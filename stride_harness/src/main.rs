//! Scenario replay binary.
//!
//! Usage:
//!   cargo run -p stride_harness -- [--scenario tape.json] [--config cfg.json]
//!                                  [--report out.json] [--tick-hz n]
//!
//! Replays a scripted input tape through the character controller over a
//! flat floor and emits a run report. Without `--scenario`, a built-in demo
//! tape runs: walk, sprint, jump, a surface change, and a gated tail.
//! `--config` and `--tick-hz` override the tape's own tuning.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use stride_core::config::ControllerConfig;
use stride_harness::runner;
use stride_harness::scenario::Scenario;
use tracing::info;

#[derive(Default)]
struct Options {
    scenario: Option<PathBuf>,
    config: Option<PathBuf>,
    report: Option<PathBuf>,
    tick_hz: Option<u32>,
}

fn parse_args() -> Options {
    let mut opts = Options::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" if i + 1 < args.len() => {
                opts.scenario = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                opts.config = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--report" if i + 1 < args.len() => {
                opts.report = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--tick-hz" if i + 1 < args.len() => {
                opts.tick_hz = args[i + 1].parse().ok();
                i += 2;
            }
            _ => i += 1,
        }
    }
    opts
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let opts = parse_args();
    let mut scenario = match &opts.scenario {
        Some(path) => Scenario::load(path).context("load scenario")?,
        None => Scenario::demo(),
    };
    if let Some(path) = &opts.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        scenario.config = ControllerConfig::from_json_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
    }
    if let Some(tick_hz) = opts.tick_hz {
        scenario.tick_hz = tick_hz;
    }

    info!(
        scenario = %scenario.name,
        ticks = scenario.ticks,
        tick_hz = scenario.tick_hz,
        floor = %scenario.floor.tag,
        "Replaying scenario"
    );

    let report = runner::run(&scenario)?;

    info!(
        footsteps = report.footsteps.len(),
        jumps = report.jumps.len(),
        gated_ticks = report.gated_ticks,
        "Run complete"
    );

    match &opts.report {
        Some(path) => {
            report.save_json(path)?;
            info!(path = %path.display(), "Report written");
        }
        None => println!("{}", report.to_json_string()?),
    }

    Ok(())
}
