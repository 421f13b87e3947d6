// Copyright @yucwang 2026

use super::material::Material;
use super::path::PathSegment;
use super::rng::LcgRng;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON, PI, RAY_BIAS};
use crate::math::warp::sample_cosine_hemisphere;

/// The scattering mode a single uniform draw selects for one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterBranch {
    /// Fresnel-weighted refraction or reflection through the surface.
    Transmit,
    /// Perfect mirror, taken whenever the reflective weight is exactly 1.
    Mirror,
    /// Probabilistic mix of the mirror and diffuse lobes.
    Blend,
    /// Cosine-weighted diffuse bounce.
    Diffuse,
}

/// Map a uniform draw onto the material's branch partition. The top
/// `has_refractive` slice of the unit interval transmits, the
/// `has_reflective` slice below it blends mirror and diffuse lobes, and
/// the remainder is diffuse. A reflective weight of exactly 1 is a
/// priority rule ahead of the rest of the partition, not part of it.
/// Comparisons are strict, so a draw landing exactly on a slice boundary
/// falls through to diffuse.
pub fn select_branch(material: &Material, prob: Float) -> ScatterBranch {
    let transmit_floor = 1.0 - material.has_refractive;
    let blend_floor = transmit_floor - material.has_reflective;
    if prob > transmit_floor {
        ScatterBranch::Transmit
    } else if material.has_reflective == 1.0 {
        ScatterBranch::Mirror
    } else if prob > blend_floor && prob < transmit_floor {
        ScatterBranch::Blend
    } else {
        ScatterBranch::Diffuse
    }
}

/// Mirror `dir` about the unit normal `n`.
pub fn reflect(dir: &Vector3f, n: &Vector3f) -> Vector3f {
    dir - n * (2.0 * dir.dot(n))
}

/// Geometric refraction of `dir` about the unit normal `n` with index
/// ratio `eta`. Past the critical angle the refracted vector degenerates
/// to zero; the caller's normalization then goes non-finite and the
/// renderer drops the path.
pub fn refract(dir: &Vector3f, n: &Vector3f, eta: Float) -> Vector3f {
    let cos_i = n.dot(dir);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vector3f::zeros()
    } else {
        dir * eta - n * (eta * cos_i + k.sqrt())
    }
}

/// Schlick's polynomial approximation of the Fresnel reflectance for an
/// index ratio `eta` and incidence cosine `cos_theta`.
pub fn schlick_reflectance(cos_theta: Float, eta: Float) -> Float {
    let r0 = (1.0 - eta) / (1.0 + eta);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

/// Cosine-weighted random direction in the hemisphere above `normal`.
/// Consumes exactly two draws from the path's stream.
pub fn sample_hemisphere(normal: &Vector3f, rng: &mut LcgRng) -> Vector3f {
    let u = Vector2f::new(rng.next_f32(), rng.next_f32());
    sample_cosine_hemisphere(normal, &u)
}

fn transmit_direction(
    dir: &Vector3f,
    normal: &Vector3f,
    material: &Material,
    prob: Float,
) -> Vector3f {
    let cos_incidence = (dir.dot(normal) / (dir.norm() * normal.norm()))
        .max(-1.0)
        .min(1.0);
    let theta = cos_incidence.acos() * (180.0 / PI);
    // Past 90 degrees the ray is leaving the medium and the ratio inverts.
    let eta = if theta >= 90.0 {
        1.0 / material.index_of_refraction
    } else {
        material.index_of_refraction
    };
    let reflectance = schlick_reflectance(dir.dot(normal).abs(), eta);
    // The branch draw doubles as the Fresnel draw.
    let out = if reflectance < prob {
        refract(dir, normal, eta)
    } else {
        reflect(dir, normal)
    };
    out.normalize()
}

/// Advance one path across one surface interaction: pick a branch from
/// the material's partition, rewrite the ray in place, tint the
/// throughput, and spend one bounce. Never fails; a degenerate refraction
/// surfaces as a non-finite direction for the renderer to discard.
pub fn scatter_ray(
    path: &mut PathSegment,
    hit_point: &Vector3f,
    normal: &Vector3f,
    material: &Material,
    rng: &mut LcgRng,
) {
    debug_assert!((normal.norm() - 1.0).abs() < EPSILON);
    debug_assert!(path.ray.direction.norm() > 0.0);

    let prob = rng.next_f32();
    match select_branch(material, prob) {
        ScatterBranch::Transmit => {
            path.ray.direction = transmit_direction(&path.ray.direction, normal, material, prob);
            path.color *= material.color * material.specular.color;
        }
        ScatterBranch::Mirror => {
            path.ray.direction = reflect(&path.ray.direction, normal);
            path.color *= material.color * material.specular.color;
        }
        ScatterBranch::Blend => {
            if rng.next_f32() < 0.5 * material.has_reflective {
                path.ray.direction = reflect(&path.ray.direction, normal);
                path.color *= material.color * material.specular.color;
            } else {
                path.ray.direction = sample_hemisphere(normal, rng);
                path.color *= material.color;
            }
        }
        ScatterBranch::Diffuse => {
            path.ray.direction = sample_hemisphere(normal, rng);
            path.color *= material.color;
        }
    }
    path.ray.origin = hit_point + path.ray.direction.normalize() * RAY_BIAS;
    path.remaining_bounces -= 1;
}
