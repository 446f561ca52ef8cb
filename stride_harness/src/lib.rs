//! `stride_harness`
//!
//! Headless host for `stride_core`: a flat-floor world with gravity,
//! scripted input tapes, and JSON run reports. The binary replays a tape
//! (or a built-in demo) and prints what the character did.

pub mod report;
pub mod runner;
pub mod scenario;
pub mod world;
