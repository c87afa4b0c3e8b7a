//! Ordered triangle collection with nearest-hit ray tracing.

use crate::error::{Result, WallLoadError};
use crate::geometry::{HitResult, Triangle};
use crate::vector::Vec3;
use std::path::Path;

/// A triangulated wall. Element index is position in the backing sequence
/// and is stable for the mesh's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// At least one triangle is required.
    pub fn new(triangles: Vec<Triangle>) -> Result<Self> {
        if triangles.is_empty() {
            return Err(WallLoadError::DomainError(
                "mesh must contain at least one triangle".to_string(),
            ));
        }
        Ok(Mesh { triangles })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::mesh::gmsh::load(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// All raw candidate hits against every triangle, with `element` set to
    /// the triangle's index. Exposed for diagnostics; [`Mesh::evaluate_hit`]
    /// does not build this list in its own hot path (see module docs).
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Vec<HitResult> {
        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(i, tri)| {
                let mut h = tri.intersect(origin, direction);
                if h.hit {
                    h.element = i as i64;
                    Some(h)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Nearest-hit resolution against the whole mesh, tracked with a single
    /// running candidate rather than collecting every hit into a `Vec`
    /// (the resource policy in the design's concurrency section calls for
    /// avoiding per-sample heap allocation in this hot path).
    ///
    /// If more than one triangle is hit at exactly the same distance, the
    /// ray is treated as a miss: an exact tie indicates a ray grazing an
    /// edge or vertex shared by several facets, and the ambiguous sample is
    /// discarded rather than arbitrarily assigned to one of them.
    pub fn evaluate_hit(&self, origin: Vec3, direction: Vec3) -> HitResult {
        let mut nearest: Option<(f64, HitResult)> = None;
        let mut tied_at_nearest = false;

        for (i, tri) in self.triangles.iter().enumerate() {
            let mut h = tri.intersect(origin, direction);
            if !h.hit {
                continue;
            }
            h.element = i as i64;
            let distance = origin.distance_to(&h.point);

            match nearest {
                None => nearest = Some((distance, h)),
                Some((best_distance, _)) if distance < best_distance => {
                    nearest = Some((distance, h));
                    tied_at_nearest = false;
                }
                Some((best_distance, _)) if distance == best_distance => {
                    tied_at_nearest = true;
                }
                _ => {}
            }
        }

        match nearest {
            None => HitResult::miss(),
            Some((_, mut h)) => {
                if tied_at_nearest {
                    h.hit = false;
                }
                h
            }
        }
    }

    pub fn areas(&self) -> Vec<f64> {
        self.triangles.iter().map(Triangle::area).collect()
    }
}
