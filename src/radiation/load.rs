//! Ties an emission-point sampler to a wall mesh: draw a point, draw a
//! direction, trace the nearest hit, and accumulate a per-triangle hit
//! histogram.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::radiation::{DirectionGenerator, RadiationDistribution};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::Index;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tunable knobs for [`RadiationLoad::add_samples_parallel`].
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy)]
pub struct ParallelSamplingOptions {
    /// Number of independent shards the sample budget is split across.
    /// Each shard gets its own seeded RNG stream and its own shadow
    /// histogram, summed at the join.
    pub shards: usize,
}

#[cfg(feature = "parallel")]
impl Default for ParallelSamplingOptions {
    fn default() -> Self {
        ParallelSamplingOptions {
            shards: rayon::current_num_threads().max(1),
        }
    }
}

/// Monte Carlo estimator for the radiative heat flux deposited on a
/// triangulated wall. Draws emission points from a [`RadiationDistribution`],
/// emits an isotropic direction from each, and traces the nearest intersection
/// with the [`Mesh`], accumulating a hit count per triangle.
#[derive(Debug)]
pub struct RadiationLoad {
    mesh: Mesh,
    distribution: RadiationDistribution<ChaCha8Rng>,
    direction_generator: DirectionGenerator<ChaCha8Rng>,
    histogram: Vec<u64>,
    total_hits: u64,
}

impl RadiationLoad {
    /// Builds a tracer over `mesh` and `distribution`. Directions are drawn
    /// from an independently-seeded stream so that reseeding the
    /// distribution's RNG alone still reproduces the same point sequence.
    pub fn new(mesh: Mesh, distribution: RadiationDistribution<ChaCha8Rng>, seed: u64) -> Self {
        let n = mesh.len();
        RadiationLoad {
            mesh,
            distribution,
            direction_generator: DirectionGenerator::new(ChaCha8Rng::seed_from_u64(seed)),
            histogram: vec![0; n],
            total_hits: 0,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn histogram(&self) -> &[u64] {
        &self.histogram
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    pub fn clear(&mut self) {
        self.histogram.iter_mut().for_each(|h| *h = 0);
        self.total_hits = 0;
    }

    /// Accumulates `n` *successful* wall hits. Unlike the source's
    /// `get_samples(N)`, which draws exactly `N` emission points regardless
    /// of whether each ray lands on the wall, this loops until `n` rays have
    /// actually struck the mesh, so every call advances the histogram by
    /// exactly `n`.
    pub fn add_samples(&mut self, n: u64) -> Result<()> {
        let mut collected = 0;
        while collected < n {
            let origin = self.distribution.sample_toroidal_point()?;
            let direction = self.direction_generator.sample();
            let hit = self.mesh.evaluate_hit(origin, direction);
            if hit.hit {
                let element = hit.element as usize;
                self.histogram[element] += 1;
                self.total_hits += 1;
                collected += 1;
            }
        }
        debug!(n, total_hits = self.total_hits, "accumulated samples");
        Ok(())
    }

    /// Converts the accumulated histogram into a per-triangle heat flux
    /// (power per unit area), given the total radiated power `p_total`.
    /// Returns all zeros if no hits have been recorded yet.
    pub fn heat_flux(&self, p_total: f64) -> Vec<f64> {
        if self.total_hits == 0 {
            return vec![0.0; self.mesh.len()];
        }
        let areas = self.mesh.areas();
        self.histogram
            .iter()
            .zip(areas.iter())
            .map(|(&hits, &area)| {
                let fraction = hits as f64 / self.total_hits as f64;
                fraction * p_total / area
            })
            .collect()
    }

    /// Splits `n` successful hits across independently-seeded shards on a
    /// rayon thread pool, each with its own [`RadiationDistribution`] clone
    /// and [`DirectionGenerator`], then sums the shadow histograms at the
    /// join. No RNG state is shared between threads.
    #[cfg(feature = "parallel")]
    pub fn add_samples_parallel(&mut self, n: u64, options: ParallelSamplingOptions) -> Result<()> {
        let shards = options.shards.max(1) as u64;
        let base = n / shards;
        let remainder = n % shards;

        let results: Vec<Result<(Vec<u64>, u64)>> = (0..shards)
            .into_par_iter()
            .map(|shard| {
                let shard_n = base + if shard < remainder { 1 } else { 0 };
                if shard_n == 0 {
                    return Ok((vec![0; self.mesh.len()], 0));
                }
                let rng = ChaCha8Rng::seed_from_u64(shard.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ shard);
                let mut shard_distribution = self.distribution.clone_with_rng(rng);
                let mut shard_directions =
                    DirectionGenerator::new(ChaCha8Rng::seed_from_u64(shard.wrapping_add(1)));
                let mut shard_histogram = vec![0u64; self.mesh.len()];
                let mut collected = 0u64;
                while collected < shard_n {
                    let origin = shard_distribution.sample_toroidal_point()?;
                    let direction = shard_directions.sample();
                    let hit = self.mesh.evaluate_hit(origin, direction);
                    if hit.hit {
                        shard_histogram[hit.element as usize] += 1;
                        collected += 1;
                    }
                }
                Ok((shard_histogram, collected))
            })
            .collect();

        for result in results {
            let (shard_histogram, shard_hits) = result?;
            for (total, shard) in self.histogram.iter_mut().zip(shard_histogram.iter()) {
                *total += shard;
            }
            self.total_hits += shard_hits;
        }
        debug!(n, total_hits = self.total_hits, "accumulated parallel samples");
        Ok(())
    }
}

/// Per-element hit count, `load[i]` for triangle index `i`.
impl Index<usize> for RadiationLoad {
    type Output = u64;

    fn index(&self, element: usize) -> &u64 {
        &self.histogram[element]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::Equilibrium;
    use crate::geometry::Triangle;
    use crate::radiation::RadiationProfile;
    use crate::vector::Vec3;
    use rand::SeedableRng;

    fn enclosing_box_mesh(half: f64) -> Mesh {
        // A closed box around the origin, so every isotropic ray from an
        // interior point hits something.
        let faces = [
            // +z and -z
            ([0.0, 0.0, half], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -half], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let mut triangles = Vec::new();
        for &(c, u, v) in &faces {
            let center = Vec3::new(c[0], c[1], c[2]);
            let du = Vec3::new(u[0], u[1], u[2]) * (4.0 * half);
            let dv = Vec3::new(v[0], v[1], v[2]) * (4.0 * half);
            let p1 = center - du - dv;
            let p2 = center + du - dv;
            let p3 = center + du + dv;
            let p4 = center - du + dv;
            triangles.push(Triangle::new(p1, p2, p3));
            triangles.push(Triangle::new(p1, p3, p4));
        }
        // Side walls enclosing a cylinder of large radius so near-horizontal
        // rays also terminate; approximated here with a tall box.
        let side = 4.0 * half;
        let corners = [
            Vec3::new(-side, -side, -2.0 * half),
            Vec3::new(side, -side, -2.0 * half),
            Vec3::new(side, side, -2.0 * half),
            Vec3::new(-side, side, -2.0 * half),
            Vec3::new(-side, -side, 2.0 * half),
            Vec3::new(side, -side, 2.0 * half),
            Vec3::new(side, side, 2.0 * half),
            Vec3::new(-side, side, 2.0 * half),
        ];
        let quads = [
            (0, 1, 5, 4),
            (1, 2, 6, 5),
            (2, 3, 7, 6),
            (3, 0, 4, 7),
        ];
        for &(a, b, c, d) in &quads {
            triangles.push(Triangle::new(corners[a], corners[b], corners[c]));
            triangles.push(Triangle::new(corners[a], corners[c], corners[d]));
        }
        Mesh::new(triangles).unwrap()
    }

    fn flat_equilibrium() -> Equilibrium {
        let r: Vec<f64> = vec![1.0, 2.0, 3.0];
        let z: Vec<f64> = vec![-1.0, 0.0, 1.0];
        let psi = vec![0.0; 9];
        Equilibrium::new(r, z, psi, 2.0, 0.0, 1.0, 0.0, 1.0, 1.0).unwrap()
    }

    fn build_load(seed: u64) -> RadiationLoad {
        let eq = flat_equilibrium();
        let profile = RadiationProfile::new(vec![0.0, 1.0], vec![1.0, 1.0]);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let distribution = RadiationDistribution::new(eq, profile, None, rng).unwrap();
        let mesh = enclosing_box_mesh(5.0);
        RadiationLoad::new(mesh, distribution, seed)
    }

    #[test]
    fn heat_flux_conserves_total_power() {
        let mut load = build_load(11);
        load.add_samples(2000).unwrap();
        assert_eq!(load.total_hits(), 2000);

        let p_total = 1.0e6;
        let flux = load.heat_flux(p_total);
        let areas = load.mesh().areas();
        let recovered: f64 = flux
            .iter()
            .zip(areas.iter())
            .zip(load.histogram().iter())
            .map(|((&f, &a), &hits)| {
                let _ = hits;
                f * a
            })
            .sum();
        assert!((recovered - p_total).abs() / p_total < 1e-9);
    }

    #[test]
    fn clear_resets_histogram_and_total() {
        let mut load = build_load(5);
        load.add_samples(100).unwrap();
        assert_eq!(load.total_hits(), 100);
        load.clear();
        assert_eq!(load.total_hits(), 0);
        assert!(load.histogram().iter().all(|&h| h == 0));
    }

    #[test]
    fn indexing_matches_histogram() {
        let mut load = build_load(9);
        load.add_samples(300).unwrap();
        for (i, &hits) in load.histogram().iter().enumerate() {
            assert_eq!(load[i], hits);
        }
    }

    #[test]
    fn heat_flux_is_zero_before_any_samples() {
        let load = build_load(6);
        let flux = load.heat_flux(1.0);
        assert!(flux.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn reproducible_with_same_seed_across_instances() {
        let mut a = build_load(77);
        let mut b = build_load(77);
        a.add_samples(500).unwrap();
        b.add_samples(500).unwrap();
        assert_eq!(a.histogram(), b.histogram());
        assert_eq!(a.total_hits(), b.total_hits());
    }
}
