//! Rejection sampler for emission points in the torus.

use crate::constants::{DEFAULT_MAX_REJECTION_TRIALS, TWO_PI};
use crate::distribution::PDF1D;
use crate::equilibrium::Equilibrium;
use crate::error::{Result, WallLoadError};
use crate::geometry::Polygon2D;
use crate::radiation::RadiationProfile;
use crate::vector::Vec3;
use rand::Rng;

/// Tunable knobs for the rejection sampler, grouped the way the rest of
/// this crate's options structs are: one struct, one `Default` impl, no
/// scattered free parameters.
#[derive(Debug, Clone, Copy)]
pub struct RejectionSamplingOptions {
    /// Trials attempted before giving up and reporting
    /// [`WallLoadError::RejectionStall`] instead of looping forever on a
    /// degenerate (all-zero-probability) configuration.
    pub max_trials: u32,
}

impl Default for RejectionSamplingOptions {
    fn default() -> Self {
        RejectionSamplingOptions {
            max_trials: DEFAULT_MAX_REJECTION_TRIALS,
        }
    }
}

/// Draws emission points `(R, z)` weighted by `p(rho(R,z)) * R` — the `R`
/// factor is the toroidal Jacobian, the volume element in cylindrical
/// coordinates — optionally masked to a poloidal contour.
#[derive(Debug)]
pub struct RadiationDistribution<Rg: Rng> {
    equilibrium: Equilibrium,
    profile: RadiationProfile,
    pdf: PDF1D,
    contour: Option<Polygon2D>,
    rmin: f64,
    rmax: f64,
    zmin: f64,
    zmax: f64,
    max_density: f64,
    options: RejectionSamplingOptions,
    rng: Rg,
}

impl<Rg: Rng> RadiationDistribution<Rg> {
    pub fn new(
        equilibrium: Equilibrium,
        profile: RadiationProfile,
        contour: Option<Polygon2D>,
        rng: Rg,
    ) -> Result<Self> {
        Self::with_options(equilibrium, profile, contour, rng, RejectionSamplingOptions::default())
    }

    pub fn with_options(
        equilibrium: Equilibrium,
        profile: RadiationProfile,
        contour: Option<Polygon2D>,
        rng: Rg,
        options: RejectionSamplingOptions,
    ) -> Result<Self> {
        let pdf = profile.to_pdf()?;
        let max_density = pdf.max();
        let (rmin, rmax) = (equilibrium.rmin(), equilibrium.rmax());
        let (zmin, zmax) = (equilibrium.zmin(), equilibrium.zmax());
        Ok(RadiationDistribution {
            equilibrium,
            profile,
            pdf,
            contour,
            rmin,
            rmax,
            zmin,
            zmax,
            max_density,
            options,
            rng,
        })
    }

    pub fn set_rmin(&mut self, rmin: f64) {
        self.rmin = rmin;
    }
    pub fn set_rmax(&mut self, rmax: f64) {
        self.rmax = rmax;
    }
    pub fn set_zmin(&mut self, zmin: f64) {
        self.zmin = zmin;
    }
    pub fn set_zmax(&mut self, zmax: f64) {
        self.zmax = zmax;
    }
    pub fn rmin(&self) -> f64 {
        self.rmin
    }
    pub fn rmax(&self) -> f64 {
        self.rmax
    }
    pub fn zmin(&self) -> f64 {
        self.zmin
    }
    pub fn zmax(&self) -> f64 {
        self.zmax
    }

    pub fn equilibrium(&self) -> &Equilibrium {
        &self.equilibrium
    }
    pub fn profile(&self) -> &RadiationProfile {
        &self.profile
    }

    /// Clones this sampler's configuration (equilibrium, profile, contour,
    /// bounds, options) onto a fresh RNG stream. Used to hand each parallel
    /// worker its own independent sampler rather than sharing one mutable
    /// RNG across threads.
    pub fn clone_with_rng<R2: Rng>(&self, rng: R2) -> RadiationDistribution<R2> {
        RadiationDistribution {
            equilibrium: self.equilibrium.clone(),
            profile: self.profile.clone(),
            pdf: self.pdf.clone(),
            contour: self.contour.clone(),
            rmin: self.rmin,
            rmax: self.rmax,
            zmin: self.zmin,
            zmax: self.zmax,
            max_density: self.max_density,
            options: self.options,
            rng,
        }
    }

    /// Acceptance test for a candidate `(R, z, u)` triple. The envelope
    /// `K = Rmax * M` dominates `P = p_hat(rho) * R` for every `R` in
    /// `[Rmin, Rmax]`; see DESIGN.md for why this replaces the source's
    /// `R0 * M` normalization.
    fn accept(&self, r: f64, z: f64, u: f64) -> bool {
        let rho = self.equilibrium.rho(r, z);
        let mut density = self.pdf.value(rho) * r;
        if let Some(contour) = &self.contour {
            if !contour.inside(r, z) {
                density = 0.0;
            }
        }
        let envelope = self.rmax * self.max_density;
        u < density / envelope
    }

    fn sample_poloidal_candidate(&mut self) -> Result<(f64, f64)> {
        for trial in 0..self.options.max_trials {
            let r = self.rng.gen_range(self.rmin..self.rmax);
            let z = self.rng.gen_range(self.zmin..self.zmax);
            let u = self.rng.gen_range(0.0..1.0);
            if self.accept(r, z, u) {
                return Ok((r, z));
            }
            if trial == self.options.max_trials - 1 {
                break;
            }
        }
        Err(WallLoadError::RejectionStall {
            trials: self.options.max_trials,
        })
    }

    pub fn sample_poloidal_point(&mut self) -> Result<Vec3> {
        let (r, z) = self.sample_poloidal_candidate()?;
        Ok(Vec3::new(r, 0.0, z))
    }

    pub fn sample_toroidal_point(&mut self) -> Result<Vec3> {
        let (r, z) = self.sample_poloidal_candidate()?;
        let phi: f64 = self.rng.gen_range(0.0..TWO_PI);
        Ok(Vec3::new(r * phi.cos(), r * phi.sin(), z))
    }

    pub fn sample_poloidal(&mut self, n: usize) -> Result<Vec<Vec3>> {
        (0..n).map(|_| self.sample_poloidal_point()).collect()
    }

    pub fn sample_toroidal(&mut self, n: usize) -> Result<Vec<Vec3>> {
        (0..n).map(|_| self.sample_toroidal_point()).collect()
    }
}
