// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// A ray owned by exactly one in-flight path segment. The scattering
/// engine rewrites both fields in place at every bounce, so unlike a
/// clipped intersection ray there is no parameter range to maintain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3f,
    pub direction: Vector3f,
}

impl Ray {
    pub fn new(origin: Vector3f, direction: Vector3f) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.direction * t
    }
}

/* Tests for Ray */
