//! Outcome of a single ray/mesh intersection test.

use crate::vector::Vec3;

/// Result of tracing one ray against a triangle or mesh.
///
/// The source carries several ad hoc hit-result shapes across its
/// directories; this is the single unified record. `element = -1` means no
/// owning triangle has been assigned yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub hit: bool,
    pub point: Vec3,
    pub element: i64,
}

impl Default for HitResult {
    fn default() -> Self {
        HitResult {
            hit: false,
            point: Vec3::ZERO,
            element: -1,
        }
    }
}

impl HitResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn hit(point: Vec3, element: i64) -> Self {
        HitResult {
            hit: true,
            point,
            element,
        }
    }
}
