//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! It avoids SIMD/unsafe and carries only the vector arithmetic the
//! locomotion model needs.

use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// 2D vector (input axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise clamp to the unit box [-1, 1]².
    pub fn clamped_unit(self) -> Self {
        Self::new(self.x.clamp(-1.0, 1.0), self.y.clamp(-1.0, 1.0))
    }
}

/// 3D vector, Y-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    /// The vector with its vertical component removed.
    pub fn horizontal(self) -> Self {
        Self::new(self.x, 0.0, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Horizontal basis vectors for a body yaw given in degrees.
///
/// Yaw 0 faces +Z; positive yaw turns toward +X (clockwise seen from above).
/// Returns `(forward, right)`, both unit-length and horizontal.
pub fn yaw_basis_deg(yaw_deg: f32) -> (Vec3, Vec3) {
    let rad = yaw_deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    (Vec3::new(sin, 0.0, cos), Vec3::new(cos, 0.0, -sin))
}
