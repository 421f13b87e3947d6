// Copyright @yucwang 2026

use super::constants::{Vector2f, Vector3f, SQRT_ONE_THIRD, TWO_PI};

/// Build a tangent/bitangent pair around `n`. The reference axis is the
/// first coordinate axis whose component along `n` stays under 1/sqrt(3);
/// at least one such axis always exists for a unit normal, which keeps the
/// cross products well conditioned in every octant.
pub fn orthonormal_basis(n: &Vector3f) -> (Vector3f, Vector3f) {
    let axis = if n.x.abs() < SQRT_ONE_THIRD {
        Vector3f::new(1.0, 0.0, 0.0)
    } else if n.y.abs() < SQRT_ONE_THIRD {
        Vector3f::new(0.0, 1.0, 0.0)
    } else {
        Vector3f::new(0.0, 0.0, 1.0)
    };
    let tangent = n.cross(&axis).normalize();
    let bitangent = n.cross(&tangent).normalize();
    (tangent, bitangent)
}

/// Warp a uniform pair onto the hemisphere above `n`, with density
/// proportional to cos(theta) against the normal.
pub fn sample_cosine_hemisphere(n: &Vector3f, u: &Vector2f) -> Vector3f {
    let cos_theta = u.x.sqrt();
    let sin_theta = (1.0 - u.x).sqrt();
    let phi = TWO_PI * u.y;
    let (tangent, bitangent) = orthonormal_basis(n);
    n * cos_theta + tangent * (phi.cos() * sin_theta) + bitangent * (phi.sin() * sin_theta)
}

#[cfg(test)]
mod tests {
    use super::{orthonormal_basis, sample_cosine_hemisphere};
    use crate::math::constants::{Float, Vector2f, Vector3f};

    fn assert_close(a: Float, b: Float) {
        assert!((a - b).abs() < 1e-5, "expected {} close to {}", a, b);
    }

    #[test]
    fn test_basis_axis_selection() {
        // Up normal: x-axis reference, so tangent = n x x = -z.
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let (tangent, bitangent) = orthonormal_basis(&n);
        assert_eq!(tangent, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(bitangent, Vector3f::new(-1.0, 0.0, 0.0));

        // X-heavy normal falls through to the y-axis reference.
        let n = Vector3f::new(1.0, 0.0, 0.0);
        let (tangent, bitangent) = orthonormal_basis(&n);
        assert_eq!(tangent, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(bitangent, Vector3f::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_basis_orthonormal() {
        let normals = [
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 2.0, 0.5).normalize(),
            Vector3f::new(-0.2, 0.9, 0.4).normalize(),
            Vector3f::new(5.0, 1.0, 1.0).normalize(),
        ];
        for n in &normals {
            let (tangent, bitangent) = orthonormal_basis(n);
            assert_close(tangent.norm(), 1.0);
            assert_close(bitangent.norm(), 1.0);
            assert_close(tangent.dot(n), 0.0);
            assert_close(bitangent.dot(n), 0.0);
            assert_close(tangent.dot(&bitangent), 0.0);
        }
    }

    #[test]
    fn test_warp_unit_and_above_horizon() {
        let normals = [
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.3, 0.5, 0.8).normalize(),
        ];
        let grid = [0.0, 0.13, 0.25, 0.5, 0.75, 0.99];
        for n in &normals {
            for &u1 in &grid {
                for &u2 in &grid {
                    let dir = sample_cosine_hemisphere(n, &Vector2f::new(u1, u2));
                    assert_close(dir.norm(), 1.0);
                    assert!(dir.dot(n) >= -1e-6);
                }
            }
        }
    }

    #[test]
    fn test_warp_extremes() {
        let n = Vector3f::new(0.3, 0.5, 0.8).normalize();
        // u1 = 1 collapses onto the normal itself.
        let top = sample_cosine_hemisphere(&n, &Vector2f::new(1.0, 0.37));
        assert_close(top.dot(&n), 1.0);
        // u1 = 0 lands on the horizon.
        let rim = sample_cosine_hemisphere(&n, &Vector2f::new(0.0, 0.37));
        assert_close(rim.dot(&n), 0.0);
        assert_close(rim.norm(), 1.0);
    }
}
