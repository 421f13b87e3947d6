// Copyright @yucwang 2026

use nalgebra as na;

pub type Float = f32;
pub type Int = i32;

pub type Vector2f = na::Vector2<Float>;
pub type Vector3f = na::Vector3<Float>;

pub const EPSILON: Float = 1e-4;
// Offset applied to every scattered ray origin so the new ray cannot
// re-intersect the surface it just left.
pub const RAY_BIAS: Float = 1e-3;
pub const PI: Float = 3.14159265359;
pub const TWO_PI: Float = 6.28318530718;
pub const SQRT_ONE_THIRD: Float = 0.57735026919;
