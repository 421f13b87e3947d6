// Copyright @yucwang 2026

use super::interaction::SurfaceHit;
use super::material::MaterialStore;
use super::path::PathSegment;
use super::rng::{path_seed, LcgRng};
use super::scatter::scatter_ray;
use std::thread;

/// Scatter a whole wavefront of paths for one bounce. Each live segment
/// with a hit gets its own stream derived from (base seed, path index,
/// bounce), so the outcome is identical under any worker count and any
/// chunk assignment. Terminated segments and misses pass through
/// untouched; the scheduler compacts them out between bounces.
pub fn scatter_segments(
    segments: &mut [PathSegment],
    hits: &[Option<SurfaceHit>],
    materials: &MaterialStore,
    base_seed: u64,
    bounce: u32,
) {
    debug_assert_eq!(segments.len(), hits.len());
    if segments.is_empty() {
        return;
    }

    let worker_count = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_size = (segments.len() + worker_count - 1) / worker_count;

    thread::scope(|scope| {
        for (chunk_index, (segment_chunk, hit_chunk)) in segments
            .chunks_mut(chunk_size)
            .zip(hits.chunks(chunk_size))
            .enumerate()
        {
            scope.spawn(move || {
                let first = chunk_index * chunk_size;
                for (offset, (segment, hit)) in
                    segment_chunk.iter_mut().zip(hit_chunk).enumerate()
                {
                    if !segment.alive() {
                        continue;
                    }
                    let hit = match hit {
                        Some(hit) => hit,
                        None => continue,
                    };
                    let material = match materials.get(hit.material_id()) {
                        Some(material) => material,
                        None => continue,
                    };
                    let mut rng =
                        LcgRng::new(path_seed(base_seed, (first + offset) as u64, bounce));
                    scatter_ray(segment, &hit.p(), &hit.normal(), material, &mut rng);
                }
            });
        }
    });
}
