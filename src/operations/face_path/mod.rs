mod slab_cache;
mod transform;

pub use slab_cache::{FaceInfo, NoSlabCache, Region, SlabGeometry, SlabGeometryCache};
pub use transform::{PlacementTransform, WorldTransform};

use tracing::{instrument, trace, warn};

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::math::frame::{lift, mirror_x, stand_upright, transform_points};
use crate::math::polygon_2d::point_in_polygon;
use crate::math::{Point2, Point3};
use crate::model::{
    Face, FaceId, FaceKind, FloorPlan, HostRef, Layer, Opening, OpeningId, OpeningKind, SlabId,
};

/// World-space outline of an opening face.
#[derive(Debug, Clone, PartialEq)]
pub enum FacePath {
    /// No type-specific outline; the caller uses its default geometry.
    Default,
    /// The outline, possibly empty when the face is suppressed.
    Points(Vec<Point3>),
}

impl FacePath {
    /// Returns the outline points, if this is not [`FacePath::Default`].
    #[must_use]
    pub fn points(&self) -> Option<&[Point3]> {
        match self {
            Self::Default => None,
            Self::Points(pts) => Some(pts),
        }
    }
}

/// Derives world-space outlines of opening faces.
///
/// Read-only: it never touches the floor plan and only reads slab
/// geometry that is already cached.
pub struct FaceGeometryResolver<'a> {
    plan: &'a FloorPlan,
    transform: &'a dyn WorldTransform,
    slabs: &'a dyn SlabGeometryCache,
    config: ResolverConfig,
}

impl<'a> FaceGeometryResolver<'a> {
    /// Creates a resolver over a floor-plan snapshot.
    #[must_use]
    pub fn new(
        plan: &'a FloorPlan,
        transform: &'a dyn WorldTransform,
        slabs: &'a dyn SlabGeometryCache,
    ) -> Self {
        Self {
            plan,
            transform,
            slabs,
            config: ResolverConfig::default(),
        }
    }

    /// Overrides the default tolerances.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the outline of `face` of `opening`.
    ///
    /// - top faces: the outer loop converted to world space;
    /// - bottom faces: the raw outer loop for niches, [`FacePath::Default`]
    ///   otherwise;
    /// - side faces: see [`Self::side_outline_of`], converted to world space.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not in the plan.
    #[instrument(skip(self))]
    pub fn face_path(&self, opening_id: OpeningId, face_id: FaceId) -> Result<FacePath> {
        let opening = self.plan.opening(opening_id)?;
        let face = self.plan.face(face_id)?;
        let layer = self.plan.layer_of_opening(opening_id);

        let path = match face.kind {
            FaceKind::Top => {
                let outer = face.outer_loop_polygon().unwrap_or_default();
                FacePath::Points(self.to_world(opening, layer, &lift(outer)))
            }
            FaceKind::Bottom => match (opening.kind, face.outer_loop_polygon()) {
                (OpeningKind::Niche, Some(outer)) => FacePath::Points(lift(outer)),
                _ => FacePath::Default,
            },
            FaceKind::Side => {
                let outline = self.side_outline(opening_id, opening, face);
                FacePath::Points(self.to_world(opening, layer, &lift(&outline)))
            }
        };
        Ok(path)
    }

    /// Side-face outline in the face's local frame, before world conversion.
    ///
    /// Empty for invalid faces and for slab-hole sides hidden in their slab.
    /// Wall-hosted openings with a reversed swing are mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not in the plan.
    pub fn side_outline_of(&self, opening_id: OpeningId, face_id: FaceId) -> Result<Vec<Point2>> {
        let opening = self.plan.opening(opening_id)?;
        let face = self.plan.face(face_id)?;
        Ok(self.side_outline(opening_id, opening, face))
    }

    fn side_outline(&self, opening_id: OpeningId, opening: &Opening, face: &Face) -> Vec<Point2> {
        let outer = match face.outer_loop_polygon() {
            Some(outer) if face.is_valid() && face.unique_parent() == Some(opening_id) => outer,
            _ => {
                warn!(?opening_id, "side face has no valid geometry");
                return Vec::new();
            }
        };

        match opening.host() {
            Some(HostRef::Slab(slab)) => {
                if opening.kind == OpeningKind::SlabHole
                    && self.is_side_face_hidden_in_slab(opening, *slab, outer)
                {
                    Vec::new()
                } else {
                    outer.to_vec()
                }
            }
            Some(HostRef::Wall { .. }) if opening.swing.is_reversed() => mirror_x(outer),
            _ => outer.to_vec(),
        }
    }

    /// Whether a slab-hole side face has no interior to be seen from.
    ///
    /// The first edge of `side` is mapped into plan coordinates. It is hidden
    /// when it runs along the slab's outer silhouette, or when the top face
    /// containing the opening does not trace it on any outline or hole.
    /// Without cached slab geometry, or without a containing top face, the
    /// face stays visible.
    #[must_use]
    pub fn is_side_face_hidden_in_slab(&self, opening: &Opening, slab: SlabId, side: &[Point2]) -> bool {
        let (a, b) = match side {
            [a, b, ..] => (opening.local_to_plan(a), opening.local_to_plan(b)),
            _ => return false,
        };
        let Some(geometry) = self.slabs.geometry_without_update(slab) else {
            trace!(?slab, "no cached slab geometry");
            return false;
        };
        let tol = self.config.point_tolerance;
        if geometry.is_line_on_profile_outer(&a, &b, tol) {
            return true;
        }

        let Ok(slab_data) = self.plan.slab(slab) else {
            return false;
        };
        let containing = slab_data.top_faces.iter().copied().find(|&id| {
            self.plan
                .top_face(id)
                .is_ok_and(|f| point_in_polygon(&opening.position, &f.outer, tol))
        });
        let Some(top_face) = containing else {
            return false;
        };
        match geometry.face_info(top_face) {
            Some(info) => !info.contains_segment(&a, &b, tol),
            None => {
                trace!(?slab, "top face missing from cached slab geometry");
                false
            }
        }
    }

    /// Places a local outline in world space.
    fn to_world(&self, opening: &Opening, layer: Option<&Layer>, points: &[Point3]) -> Vec<Point3> {
        if !opening.kind.is_wall_mounted() {
            return points.to_vec();
        }
        let upright = stand_upright(points, opening.z_length);
        if opening.kind.takes_world_matrix() {
            transform_points(&self.transform.world_matrix(opening, layer), &upright)
        } else {
            upright
        }
    }
}
