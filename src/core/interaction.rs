// Copyright @yucwang 2026

use super::material::MaterialId;
use crate::math::constants::Vector3f;

/// What the intersection layer hands over for one active ray at one
/// bounce: the hit point, the outward unit normal at that point, and the
/// material of the surface that was hit.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    p: Vector3f,
    normal: Vector3f,
    material_id: MaterialId,
}

impl SurfaceHit {
    pub fn new(p: Vector3f, normal: Vector3f, material_id: MaterialId) -> Self {
        Self { p, normal, material_id }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn material_id(&self) -> MaterialId {
        self.material_id
    }
}
