//! Footstep audio.
//!
//! The controller never talks to a mixer; it hands clip names to a
//! [`StepSink`] and forgets them. Overlapping playback, channel limits, and
//! actual decoding are the sink's concern. Clip selection is uniformly
//! random within a surface's bank, from a seeded generator so replays of
//! the same tape pick the same clips.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::surface::Surface;

/// One-shot playback target.
pub trait StepSink: Send + Sync {
    fn play(&mut self, clip: &str);
}

/// Sink that drops every clip. Useful for headless hosts.
#[derive(Default)]
pub struct NullSink;

impl StepSink for NullSink {
    fn play(&mut self, _clip: &str) {}
}

/// Sink that records clip names in playback order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<String>,
}

impl StepSink for RecordingSink {
    fn play(&mut self, clip: &str) {
        self.played.push(clip.to_string());
    }
}

impl<T: StepSink> StepSink for Arc<Mutex<T>> {
    fn play(&mut self, clip: &str) {
        self.lock().unwrap().play(clip);
    }
}

/// Picks and plays footstep clips per surface.
pub struct FootstepPlayer {
    banks: HashMap<Surface, Vec<String>>,
    rng: StdRng,
    sink: Box<dyn StepSink>,
}

impl FootstepPlayer {
    pub fn new(banks: HashMap<Surface, Vec<String>>, seed: u64, sink: Box<dyn StepSink>) -> Self {
        Self {
            banks,
            rng: StdRng::seed_from_u64(seed),
            sink,
        }
    }

    /// Plays one uniformly random clip from the surface's bank.
    ///
    /// Surfaces without a usable bank (no entry, or an empty one) are a
    /// silent no-op; the config validation pass has already warned about
    /// them once. Returns whether a clip was played.
    pub fn play_step(&mut self, surface: Surface) -> bool {
        let Some(bank) = self.banks.get(&surface).filter(|b| !b.is_empty()) else {
            debug!(?surface, "footstep fired on a surface with no bank");
            return false;
        };
        let clip = &bank[self.rng.gen_range(0..bank.len())];
        debug!(?surface, %clip, "footstep");
        self.sink.play(clip);
        true
    }
}
