//! `stride_core`
//!
//! First-person character locomotion as a host-driven simulation library.
//!
//! Design goals:
//! - Deterministic: seeded randomness, fixed tick order, no wall clock.
//! - Host primitives behind traits (ground probe, match gate, audio sink).
//! - Event delivery through scoped port/binding pairs, never callbacks.
//! - No `unsafe`.

pub mod audio;
pub mod cadence;
pub mod camera;
pub mod config;
pub mod controller;
pub mod gate;
pub mod ground;
pub mod input;
pub mod locomotion;
pub mod math;
pub mod surface;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::audio::*;
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::gate::*;
    pub use crate::ground::*;
    pub use crate::input::*;
    pub use crate::locomotion::*;
    pub use crate::math::*;
    pub use crate::surface::*;
}
