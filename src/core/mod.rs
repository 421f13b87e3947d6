// Copyright @yucwang 2026

pub mod batch;
pub mod interaction;
pub mod material;
pub mod path;
pub mod rng;
pub mod scatter;
