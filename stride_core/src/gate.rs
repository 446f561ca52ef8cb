//! Control gating.
//!
//! The controller only runs while the match says so. The authority is
//! injected at construction as a read-only query, so the controller never
//! reaches for ambient global state; hosts flip the flags from wherever
//! their round logic lives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of the match, as the controller sees it.
pub trait MatchState: Send + Sync {
    /// Player has spawned and owns control.
    fn player_ready(&self) -> bool;

    /// Round is already decided for this player.
    fn player_won(&self) -> bool;

    /// Whether the controller should simulate at all this tick.
    fn control_active(&self) -> bool {
        self.player_ready() && !self.player_won()
    }
}

/// Gate that is always live. Convenience for tests and free-run hosts.
#[derive(Default)]
pub struct AlwaysLive;

impl MatchState for AlwaysLive {
    fn player_ready(&self) -> bool {
        true
    }

    fn player_won(&self) -> bool {
        false
    }
}

/// Match state backed by shared flags.
///
/// Clones share the same flags, so the host keeps one clone for its round
/// logic and hands another to the controller.
#[derive(Clone, Default)]
pub struct SharedMatchState {
    ready: Arc<AtomicBool>,
    won: Arc<AtomicBool>,
}

impl SharedMatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Relaxed);
    }

    pub fn set_won(&self, won: bool) {
        self.won.store(won, Ordering::Relaxed);
    }
}

impl MatchState for SharedMatchState {
    fn player_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    fn player_won(&self) -> bool {
        self.won.load(Ordering::Relaxed)
    }
}
