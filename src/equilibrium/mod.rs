//! Magnetic equilibrium: the rectangular ψ(R,z) grid and its eqdsk ingest.

mod eqdsk;
#[allow(clippy::module_inception)]
mod equilibrium;

pub use equilibrium::Equilibrium;
