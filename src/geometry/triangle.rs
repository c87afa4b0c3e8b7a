//! Three-vertex facet with a Möller–Trumbore ray intersection test.

use crate::constants::TRIANGLE_EPSILON;
use crate::geometry::hit::HitResult;
use crate::vector::Vec3;

/// A planar triangular facet. Vertices are assumed non-collinear; a
/// degenerate triangle simply misses every ray via the `|det| < epsilon`
/// branch rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl Triangle {
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Triangle { p1, p2, p3 }
    }

    /// Möller–Trumbore ray/triangle intersection. No back-face culling:
    /// the facet is hit the same way from either side.
    ///
    /// `element` on the returned [`HitResult`] is always `-1`; the owning
    /// [`crate::mesh::Mesh`] fills it in once it knows the triangle's index.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> HitResult {
        let e1 = self.p2 - self.p1;
        let e2 = self.p3 - self.p1;

        let p = direction.cross(&e2);
        let det = e1.dot(&p);
        if det.abs() < TRIANGLE_EPSILON {
            return HitResult::miss();
        }
        let inv_det = 1.0 / det;

        let t_vec = origin - self.p1;
        let u = t_vec.dot(&p) * inv_det;
        if u < 0.0 || u > 1.0 {
            return HitResult::miss();
        }

        let q = t_vec.cross(&e1);
        let v = direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return HitResult::miss();
        }

        let t = e2.dot(&q) * inv_det;
        let point = origin + direction * t;
        if t > TRIANGLE_EPSILON {
            HitResult::hit(point, -1)
        } else {
            HitResult {
                hit: false,
                point,
                element: -1,
            }
        }
    }

    /// Unit normal of `(p2-p1) x (p3-p1)`.
    pub fn normal(&self) -> Vec3 {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1)).normalized()
    }

    /// Heron's-formula area, computed via the equivalent cross-product
    /// identity `0.5 * |(p2-p1) x (p3-p1)|`.
    pub fn area(&self) -> f64 {
        0.5 * (self.p2 - self.p1).cross(&(self.p3 - self.p1)).length()
    }

    pub fn center(&self) -> Vec3 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn s1_single_facet_hit() {
        let t = sample_triangle();
        let result = t.intersect(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(result.hit);
        assert!(result.point.distance_to(&Vec3::new(0.2, 0.2, 0.0)) < 1e-9);
    }

    #[test]
    fn s2_parallel_miss() {
        let t = sample_triangle();
        let result = t.intersect(Vec3::new(0.2, 0.2, 1.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(!result.hit);
    }

    #[test]
    fn s3_back_face_hit_no_culling() {
        let t = sample_triangle();
        let result = t.intersect(Vec3::new(0.2, 0.2, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(result.hit);
    }

    #[test]
    fn barycentric_point_is_hit_from_offset_along_normal() {
        let t = sample_triangle();
        let n = t.normal();
        let (u, v) = (0.2, 0.3);
        let q = t.p1 * u + t.p2 * v + t.p3 * (1.0 - u - v);
        let origin = q + n * 2.0;
        let result = t.intersect(origin, -n);
        assert!(result.hit);
        assert!(result.point.distance_to(&q) < 1e-9);
    }

    #[test]
    fn area_and_normal_of_right_triangle() {
        let t = sample_triangle();
        assert!((t.area() - 0.5).abs() < 1e-12);
        assert!((t.normal().z - 1.0).abs() < 1e-12);
    }
}
