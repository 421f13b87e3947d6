// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

pub type MaterialId = usize;

/// Tint applied on top of the base color whenever a path takes a mirror
/// or transmissive bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specular {
    pub color: RGBSpectrum,
}

/// Immutable surface description, shared read-only by every path that hits
/// the surface. `has_reflective` and `has_refractive` are probability
/// weights; the diffuse weight is the implicit remainder. Weights are
/// trusted as supplied: values outside a valid partition shift probability
/// mass between branches instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: RGBSpectrum,
    pub specular: Specular,
    pub has_reflective: Float,
    pub has_refractive: Float,
    pub index_of_refraction: Float,
}

impl Material {
    pub fn new(
        color: RGBSpectrum,
        specular_color: RGBSpectrum,
        has_reflective: Float,
        has_refractive: Float,
        index_of_refraction: Float,
    ) -> Self {
        Self {
            color,
            specular: Specular { color: specular_color },
            has_reflective,
            has_refractive,
            index_of_refraction,
        }
    }

    /// Matte surface: all probability mass on the diffuse branch.
    pub fn diffuse(color: RGBSpectrum) -> Self {
        Self::new(color, RGBSpectrum::splat(1.0), 0.0, 0.0, 1.0)
    }

    /// Perfect mirror.
    pub fn mirror(color: RGBSpectrum, specular_color: RGBSpectrum) -> Self {
        Self::new(color, specular_color, 1.0, 0.0, 1.0)
    }

    /// Fully transmissive surface with the given refractive index.
    pub fn dielectric(
        color: RGBSpectrum,
        specular_color: RGBSpectrum,
        index_of_refraction: Float,
    ) -> Self {
        Self::new(color, specular_color, 0.0, 1.0, index_of_refraction)
    }
}

/// Append-only material table, built once at scene load and then read
/// concurrently by every path for the whole render. Sharing is by `Arc`,
/// so no synchronization is ever needed.
pub struct MaterialStore {
    materials: Vec<Arc<Material>>,
}

impl Default for MaterialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialStore {
    pub fn new() -> Self {
        Self { materials: Vec::new() }
    }

    pub fn add(&mut self, material: Material) -> MaterialId {
        self.materials.push(Arc::new(material));
        self.materials.len() - 1
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id).map(|material| material.as_ref())
    }

    /// Shared handle for collaborators that outlive a borrow of the store.
    pub fn share(&self, id: MaterialId) -> Option<Arc<Material>> {
        self.materials.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
