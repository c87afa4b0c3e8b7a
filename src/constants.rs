//! Numerical constants shared across the sampler and tracer.

// ============================================================================
// Geometry
// ============================================================================

/// Möller–Trumbore determinant/parallel-ray threshold.
pub const TRIANGLE_EPSILON: f64 = 1e-6;

/// Full turn, used for toroidal angle and direction-sampling draws.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

// ============================================================================
// Sampling
// ============================================================================

/// Default bound on rejection-sampling trials before a [`crate::error::WallLoadError::RejectionStall`]
/// is reported, rather than looping forever on a degenerate (all-zero) emissivity profile.
pub const DEFAULT_MAX_REJECTION_TRIALS: u32 = 10_000_000;
