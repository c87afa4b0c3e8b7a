//! Isotropic unit-direction sampling.

use crate::vector::Vec3;
use rand::Rng;

/// Samples directions uniformly over the unit sphere.
///
/// The source's documented algorithm draws α ∈ [0, 2π) and β ∈ [0, π)
/// independently and returns `(sin β cos α, sin β sin α, cos β)`; that form
/// over-samples the poles and is not uniform on S². This generator instead
/// draws `u ∈ [-1, 1]`, `v ∈ [0, 2π)` and returns
/// `(sqrt(1-u^2) cos v, sqrt(1-u^2) sin v, u)`, which is exactly uniform.
#[derive(Debug)]
pub struct DirectionGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> DirectionGenerator<R> {
    pub fn new(rng: R) -> Self {
        DirectionGenerator { rng }
    }

    pub fn sample(&mut self) -> Vec3 {
        let u = self.rng.gen_range(-1.0..=1.0);
        let v = self.rng.gen_range(0.0..crate::constants::TWO_PI);
        let r = (1.0 - u * u).max(0.0).sqrt();
        Vec3::new(r * v.cos(), r * v.sin(), u)
    }

    pub fn sample_n(&mut self, n: usize) -> Vec<Vec3> {
        (0..n).map(|_| self.sample()).collect()
    }
}
