//! Rectangular (R,z) equilibrium grid and bilinear ψ/ρ evaluation.

use crate::error::{Result, WallLoadError};
use crate::vector::Vec3;
use std::path::Path;

/// Reconstructed magnetic equilibrium: a rectangular grid of poloidal flux
/// ψ(R,z), plus the scalar quantities needed to turn ψ into the normalized
/// flux label ρ.
///
/// ψ is stored already negated relative to its on-disk eqdsk convention, so
/// that `psi_axis > psi_edge` holds downstream, exactly as the ingest
/// routine in [`crate::equilibrium::eqdsk`] guarantees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equilibrium {
    r: Vec<f64>,
    z: Vec<f64>,
    /// Row-major, R fastest: `psi[i + j * nr]`.
    psi: Vec<f64>,
    nr: usize,
    nz: usize,
    r0: f64,
    z0: f64,
    psi_axis: f64,
    psi_edge: f64,
    btor: f64,
    ip: f64,
}

impl Equilibrium {
    /// Constructs an equilibrium from an eqdsk file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::equilibrium::eqdsk::load(path.as_ref())
    }

    /// Constructs an equilibrium directly from an already-parsed grid.
    /// `psi` must already follow the negated-on-load sign convention
    /// (`psi_axis > psi_edge`).
    pub fn new(
        r: Vec<f64>,
        z: Vec<f64>,
        psi: Vec<f64>,
        r0: f64,
        z0: f64,
        psi_axis: f64,
        psi_edge: f64,
        btor: f64,
        ip: f64,
    ) -> Result<Self> {
        let (nr, nz) = (r.len(), z.len());
        if nr < 2 || nz < 2 || psi.len() != nr * nz {
            return Err(WallLoadError::DomainError(format!(
                "equilibrium grid shape mismatch: {nr}x{nz} grid needs {} psi values, got {}",
                nr * nz,
                psi.len()
            )));
        }
        if psi_axis == psi_edge {
            return Err(WallLoadError::DomainError(
                "degenerate equilibrium: psi_axis == psi_edge".to_string(),
            ));
        }
        Ok(Equilibrium {
            r,
            z,
            psi,
            nr,
            nz,
            r0,
            z0,
            psi_axis,
            psi_edge,
            btor,
            ip,
        })
    }

    pub fn r0(&self) -> f64 {
        self.r0
    }
    pub fn z0(&self) -> f64 {
        self.z0
    }
    pub fn psi_axis(&self) -> f64 {
        self.psi_axis
    }
    pub fn psi_edge(&self) -> f64 {
        self.psi_edge
    }
    pub fn btor(&self) -> f64 {
        self.btor
    }
    pub fn ip(&self) -> f64 {
        self.ip
    }
    pub fn rmin(&self) -> f64 {
        self.r[0]
    }
    pub fn rmax(&self) -> f64 {
        self.r[self.nr - 1]
    }
    pub fn zmin(&self) -> f64 {
        self.z[0]
    }
    pub fn zmax(&self) -> f64 {
        self.z[self.nz - 1]
    }

    /// Bilinear interpolation of ψ; returns 0 outside the grid rectangle.
    pub fn psi(&self, r: f64, z: f64) -> f64 {
        if r < self.r[0] || r > self.r[self.nr - 1] || z < self.z[0] || z > self.z[self.nz - 1] {
            return 0.0;
        }
        let Some(i0) = (0..self.nr - 1).find(|&i| self.r[i] <= r && r <= self.r[i + 1]) else {
            return 0.0;
        };
        let Some(j0) = (0..self.nz - 1).find(|&j| self.z[j] <= z && z <= self.z[j + 1]) else {
            return 0.0;
        };

        let (r0, r1) = (self.r[i0], self.r[i0 + 1]);
        let (z0, z1) = (self.z[j0], self.z[j0 + 1]);
        let q00 = self.psi[i0 + j0 * self.nr];
        let q10 = self.psi[i0 + 1 + j0 * self.nr];
        let q11 = self.psi[i0 + 1 + (j0 + 1) * self.nr];
        let q01 = self.psi[i0 + (j0 + 1) * self.nr];

        let fr0 = (r1 - r) / (r1 - r0) * q00 + (r - r0) / (r1 - r0) * q10;
        let fr1 = (r1 - r) / (r1 - r0) * q01 + (r - r0) / (r1 - r0) * q11;
        (z1 - z) / (z1 - z0) * fr0 + (z - z0) / (z1 - z0) * fr1
    }

    /// Normalized poloidal flux label ρ; the radicand is clamped to 0 so
    /// points beyond the separatrix (or outside the grid, where ψ=0)
    /// cleanly return a ρ whose emissivity lookup vanishes.
    pub fn rho(&self, r: f64, z: f64) -> f64 {
        let radicand = (self.psi_axis - self.psi(r, z)) / (self.psi_axis - self.psi_edge);
        radicand.max(0.0).sqrt()
    }

    /// Axis location as a 3-D point at toroidal angle 0, for diagnostics.
    pub fn axis_point(&self) -> Vec3 {
        Vec3::new(self.r0, 0.0, self.z0)
    }
}
