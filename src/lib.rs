//! # wallload -- Monte Carlo Wall Load Estimator
//!
//! Estimates the radiative heat flux deposited on the plasma-facing wall of
//! a toroidal fusion device. Emission points are drawn from a radial
//! emissivity profile weighted by the toroidal volume element, isotropic
//! directions are cast from each point, and the nearest intersection with a
//! triangulated wall mesh is accumulated into a per-element hit histogram.
//!
//! ## Quick Start
//!
//! ```rust
//! use wallload::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> Result<(), wallload::error::WallLoadError> {
//! let r = vec![1.0, 2.0, 3.0];
//! let z = vec![-1.0, 0.0, 1.0];
//! let psi = vec![0.0; 9];
//! let equilibrium = Equilibrium::new(r, z, psi, 2.0, 0.0, 1.0, 0.0, 1.0, 1.0)?;
//!
//! let profile = RadiationProfile::new(vec![0.0, 1.0], vec![1.0, 0.0]);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let distribution = RadiationDistribution::new(equilibrium, profile, None, rng)?;
//!
//! let mesh = Mesh::new(vec![Triangle::new(
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! )])?;
//!
//! let mut load = RadiationLoad::new(mesh, distribution, 42);
//! load.add_samples(1000)?;
//! let flux = load.heat_flux(1.0e6);
//! # let _ = flux;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`vector`] -- `Vec3`: the shared 3-D vector type.
//! - [`geometry`] -- Triangle/ray intersection, hit results, 2-D poloidal contours.
//! - [`distribution`] -- 1-D piecewise-linear probability densities.
//! - [`equilibrium`] -- The ψ(R, z) magnetic equilibrium grid and eqdsk ingest.
//! - [`mesh`] -- Triangulated wall geometry and nearest-hit ray tracing.
//! - [`radiation`] -- Emission sampling, direction generation, and the wall tracer.
//! - [`error`] -- The crate's error taxonomy.
//! - [`constants`] -- Shared numerical constants.

pub mod constants;
pub mod distribution;
pub mod equilibrium;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod radiation;
pub mod vector;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::distribution::PDF1D;
    pub use crate::equilibrium::Equilibrium;
    pub use crate::error::{Result, WallLoadError};
    pub use crate::geometry::{HitResult, Polygon2D, Triangle};
    pub use crate::mesh::Mesh;
    pub use crate::radiation::{
        DirectionGenerator, RadiationDistribution, RadiationLoad, RadiationProfile,
        RejectionSamplingOptions,
    };
    pub use crate::vector::Vec3;
}
