use slotmap::SecondaryMap;

use crate::math::polygon_2d::segment_on_loop;
use crate::math::Point2;
use crate::model::{SlabId, TopFaceId};

/// One traced region of a slab top face: its outline and holes.
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub outer: Vec<Point2>,
    pub holes: Vec<Vec<Point2>>,
}

/// Recorded outline geometry of one slab top face.
#[derive(Debug, Clone, Default)]
pub struct FaceInfo {
    pub geometry: Vec<Region>,
}

impl FaceInfo {
    /// Returns `true` if `a`–`b` runs along any outline or hole loop.
    #[must_use]
    pub fn contains_segment(&self, a: &Point2, b: &Point2, tolerance: f64) -> bool {
        self.geometry.iter().any(|region| {
            segment_on_loop(a, b, &region.outer, tolerance)
                || region
                    .holes
                    .iter()
                    .any(|hole| segment_on_loop(a, b, hole, tolerance))
        })
    }
}

/// Cached plan geometry of a slab.
#[derive(Debug, Clone, Default)]
pub struct SlabGeometry {
    /// Loops of the slab's outer silhouette.
    pub profile_outer: Vec<Vec<Point2>>,
    /// Outline geometry per top face.
    pub face_info: SecondaryMap<TopFaceId, FaceInfo>,
}

impl SlabGeometry {
    /// Returns `true` if `a`–`b` lies on the slab's outer silhouette.
    #[must_use]
    pub fn is_line_on_profile_outer(&self, a: &Point2, b: &Point2, tolerance: f64) -> bool {
        self.profile_outer
            .iter()
            .any(|l| segment_on_loop(a, b, l, tolerance))
    }

    /// Returns the recorded geometry of a top face.
    #[must_use]
    pub fn face_info(&self, face: TopFaceId) -> Option<&FaceInfo> {
        self.face_info.get(face)
    }
}

/// Read-only access to whatever slab geometry is currently cached.
///
/// Implementations must not recompute anything: a missing or stale entry
/// is reported as `None`.
pub trait SlabGeometryCache {
    /// Returns the cached geometry of `slab` without triggering an update.
    fn geometry_without_update(&self, slab: SlabId) -> Option<&SlabGeometry>;
}

impl SlabGeometryCache for SecondaryMap<SlabId, SlabGeometry> {
    fn geometry_without_update(&self, slab: SlabId) -> Option<&SlabGeometry> {
        self.get(slab)
    }
}

/// A cache that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSlabCache;

impl SlabGeometryCache for NoSlabCache {
    fn geometry_without_update(&self, _slab: SlabId) -> Option<&SlabGeometry> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ]
    }

    #[test]
    fn face_info_checks_holes() {
        let info = FaceInfo {
            geometry: vec![Region {
                outer: square(0.0, 0.0, 10.0),
                holes: vec![square(4.0, 4.0, 2.0)],
            }],
        };
        assert!(info.contains_segment(&Point2::new(4.0, 4.0), &Point2::new(6.0, 4.0), 1e-9));
        assert!(info.contains_segment(&Point2::new(0.0, 2.0), &Point2::new(0.0, 8.0), 1e-9));
        assert!(!info.contains_segment(&Point2::new(3.0, 3.0), &Point2::new(7.0, 3.0), 1e-9));
    }

    #[test]
    fn profile_outer_test() {
        let g = SlabGeometry {
            profile_outer: vec![square(0.0, 0.0, 10.0)],
            face_info: SecondaryMap::new(),
        };
        assert!(g.is_line_on_profile_outer(&Point2::new(10.0, 1.0), &Point2::new(10.0, 3.0), 1e-9));
        assert!(!g.is_line_on_profile_outer(&Point2::new(9.0, 1.0), &Point2::new(9.0, 3.0), 1e-9));
    }

    #[test]
    fn profile_outer_spans_split_vertex() {
        // Bottom silhouette edge split at (4, 0).
        let g = SlabGeometry {
            profile_outer: vec![vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ]],
            face_info: SecondaryMap::new(),
        };
        assert!(g.is_line_on_profile_outer(&Point2::new(3.0, 0.0), &Point2::new(6.0, 0.0), 1e-9));
        assert!(g.is_line_on_profile_outer(&Point2::new(6.0, 0.0), &Point2::new(3.0, 0.0), 1e-9));
        assert!(!g.is_line_on_profile_outer(&Point2::new(3.0, 0.0), &Point2::new(10.0, 1.0), 1e-9));
    }
}
