// Copyright @yucwang 2026

use meringue::core::rng::LcgRng;
use meringue::core::scatter::sample_hemisphere;
use meringue::math::constants::{Float, Vector3f};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <samples> [--seed N] [--normal X Y Z]",
            args[0]
        );
        std::process::exit(1);
    }

    let samples: usize = args[1]
        .parse()
        .unwrap_or_else(|e| panic!("bad sample count {}: {}", args[1], e));
    let mut seed: u64 = 0;
    let mut normal = Vector3f::new(0.0, 1.0, 0.0);

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--normal" => {
                let x = args.get(i + 1).and_then(|v| v.parse::<Float>().ok());
                let y = args.get(i + 2).and_then(|v| v.parse::<Float>().ok());
                let z = args.get(i + 3).and_then(|v| v.parse::<Float>().ok());
                if let (Some(x), Some(y), Some(z)) = (x, y, z) {
                    normal = Vector3f::new(x, y, z);
                }
                i += 3;
            }
            _ => {}
        }
        i += 1;
    }
    let normal = normal.normalize();

    let mut rng = LcgRng::new(seed);
    let mut dot_sum = 0.0f64;
    let mut min_dot = Float::MAX;
    let mut below_half = 0usize;
    let mut worst_norm_error = 0.0f32;

    for _ in 0..samples {
        let dir = sample_hemisphere(&normal, &mut rng);
        let d = dir.dot(&normal);
        dot_sum += d as f64;
        if d < min_dot {
            min_dot = d;
        }
        if d < 0.5 {
            below_half += 1;
        }
        let err = (dir.norm() - 1.0).abs();
        if err > worst_norm_error {
            worst_norm_error = err;
        }
    }

    let n = samples as f64;
    println!(
        "Normal: ({:.4}, {:.4}, {:.4}), samples: {}, seed: {}",
        normal.x, normal.y, normal.z, samples, seed
    );
    println!("Min dot: {:.6} (no sample may fall below the horizon)", min_dot);
    println!("Mean dot: {:.6} (cosine-weighted expectation is 2/3)", dot_sum / n);
    println!(
        "Fraction with dot < 0.5: {:.4} (cosine-weighted CDF gives 0.25)",
        below_half as f64 / n
    );
    println!("Worst norm error: {:.2e}", worst_norm_error);
}
