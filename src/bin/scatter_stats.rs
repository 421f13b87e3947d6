// Copyright @yucwang 2026

use indicatif::{ProgressBar, ProgressStyle};
use meringue::core::batch::scatter_segments;
use meringue::core::interaction::SurfaceHit;
use meringue::core::material::{Material, MaterialStore};
use meringue::core::path::PathSegment;
use meringue::math::constants::{Int, Vector3f};
use meringue::math::ray::Ray;
use meringue::math::spectrum::RGBSpectrum;

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <paths> [--bounces N] [--seed N]", args[0]);
        std::process::exit(1);
    }

    let paths: usize = args[1]
        .parse()
        .unwrap_or_else(|e| panic!("bad path count {}: {}", args[1], e));
    let mut bounces: u32 = 8;
    let mut seed: u64 = 0;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--bounces" => {
                i += 1;
                bounces = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(8);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            _ => {}
        }
        i += 1;
    }

    let mut store = MaterialStore::new();
    let matte = store.add(Material::diffuse(RGBSpectrum::new(0.73, 0.71, 0.68)));
    let mirror = store.add(Material::mirror(
        RGBSpectrum::splat(0.95),
        RGBSpectrum::splat(0.98),
    ));
    let glass = store.add(Material::dielectric(
        RGBSpectrum::splat(0.99),
        RGBSpectrum::splat(0.97),
        1.5,
    ));
    let surface_ids = [matte, mirror, glass, matte];

    let mut segments: Vec<PathSegment> = (0..paths)
        .map(|i| {
            let origin = Vector3f::new((i % 1024) as f32 * 0.01, 1.0, (i / 1024) as f32 * 0.01);
            PathSegment::new(Ray::new(origin, Vector3f::new(0.0, -1.0, 0.0)), bounces as Int)
        })
        .collect();

    log::info!("Scattering {} paths for {} bounces, seed {}.", paths, bounces, seed);

    let progress = ProgressBar::new(bounces as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} bounces")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for bounce in 0..bounces {
        // Synthetic scene: every live, uncorrupted ray re-hits a ground
        // plane under its own footprint, cycling through the material
        // table. Exercises the full branch mix without an intersector.
        let hits: Vec<Option<SurfaceHit>> = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                if !segment.alive() || !segment.has_finite_throughput() {
                    return None;
                }
                let p = Vector3f::new(segment.ray.origin.x, 0.0, segment.ray.origin.z);
                Some(SurfaceHit::new(
                    p,
                    Vector3f::new(0.0, 1.0, 0.0),
                    surface_ids[i % surface_ids.len()],
                ))
            })
            .collect();
        scatter_segments(&mut segments, &hits, &store, seed, bounce);
        progress.inc(1);
    }
    progress.finish();

    let mut finite = 0usize;
    let mut sum = [0.0f64; 3];
    let mut min_luminance = f64::MAX;
    let mut max_luminance = 0.0f64;
    for segment in &segments {
        if !segment.has_finite_throughput() {
            continue;
        }
        finite += 1;
        let mut luminance = 0.0f64;
        for c in 0..3 {
            sum[c] += segment.color[c] as f64;
            luminance += segment.color[c] as f64;
        }
        luminance /= 3.0;
        if luminance < min_luminance {
            min_luminance = luminance;
        }
        if luminance > max_luminance {
            max_luminance = luminance;
        }
    }

    log::info!("Done: {} of {} paths kept finite throughput.", finite, paths);

    let n = finite.max(1) as f64;
    println!("Paths: {} ({} finite after {} bounces)", paths, finite, bounces);
    println!(
        "Mean throughput: {:.6}, {:.6}, {:.6}",
        sum[0] / n,
        sum[1] / n,
        sum[2] / n
    );
    println!(
        "Throughput luminance range: {:.6} .. {:.6}",
        min_luminance, max_luminance
    );
}
