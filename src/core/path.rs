// Copyright @yucwang 2026

use crate::math::constants::Int;
use crate::math::ray::Ray;
use crate::math::spectrum::RGBSpectrum;

/// One ray in flight: the ray itself, the multiplicative throughput
/// accumulated over its scattering history, and the remaining bounce
/// budget. The budget is spent here but acting on its exhaustion is the
/// scheduler's decision, not this type's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub ray: Ray,
    pub color: RGBSpectrum,
    pub remaining_bounces: Int,
}

impl PathSegment {
    pub fn new(ray: Ray, max_bounces: Int) -> Self {
        Self {
            ray,
            color: RGBSpectrum::splat(1.0),
            remaining_bounces: max_bounces,
        }
    }

    pub fn alive(&self) -> bool {
        self.remaining_bounces > 0
    }

    /// A path whose throughput went non-finite is corrupted; the renderer
    /// drops it instead of tracing it further.
    pub fn has_finite_throughput(&self) -> bool {
        self.color.is_finite()
    }
}
