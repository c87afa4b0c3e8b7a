//! Radial emissivity profile p(ρ).

use crate::distribution::PDF1D;
use crate::error::Result;

/// A tabulated radial emissivity profile. `to_pdf` normalizes it into a
/// [`PDF1D`] over ρ for use by [`crate::radiation::RadiationDistribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadiationProfile {
    rho: Vec<f64>,
    power_density: Vec<f64>,
}

impl RadiationProfile {
    pub fn new(rho: Vec<f64>, power_density: Vec<f64>) -> Self {
        RadiationProfile { rho, power_density }
    }

    pub fn rho(&self) -> &[f64] {
        &self.rho
    }

    pub fn power_density(&self) -> &[f64] {
        &self.power_density
    }

    /// Builds a [`PDF1D`] over `rho` from the raw `power_density` samples.
    /// `PDF1D::new` does its own trapezoidal normalization and already
    /// rejects a non-positive integral with `DomainError`, so the raw values
    /// are passed through unmodified rather than pre-dividing here.
    pub fn to_pdf(&self) -> Result<PDF1D> {
        PDF1D::new(self.rho.clone(), self.power_density.clone())
    }
}
