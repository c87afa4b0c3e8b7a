//! Cosine-weighted hemisphere scatter about a surface normal.
//!
//! Present for completeness — the source carries this as a standalone
//! primitive — but it is never called from [`crate::radiation::RadiationLoad`];
//! reflection physics is out of scope for the tracer.

use crate::vector::Vec3;
use rand::Rng;

#[derive(Debug)]
pub struct DiffuseScatter<R: Rng> {
    rng: R,
}

impl<R: Rng> DiffuseScatter<R> {
    pub fn new(rng: R) -> Self {
        DiffuseScatter { rng }
    }

    /// Cosine-weighted direction in the hemisphere about `normal`, via
    /// Malley's method: sample a point on the unit disk, project up onto
    /// the hemisphere, then rotate from the local frame into world space.
    pub fn sample(&mut self, normal: Vec3) -> Vec3 {
        let u1: f64 = self.rng.gen_range(0.0..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        let theta = u1.sqrt().acos();
        let phi = u2 * crate::constants::TWO_PI;

        let local = Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());
        let n = normal.normalized();
        let helper = if n.x.abs() < 0.9 {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            Vec3::new(0.0, 1.0, 0.0)
        };
        let tangent = helper.cross(&n).normalized();
        let bitangent = n.cross(&tangent);

        tangent * local.x + bitangent * local.y + n * local.z
    }
}
