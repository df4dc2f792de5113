use crate::math::Point2;

use super::OpeningId;

slotmap::new_key_type! {
    /// Unique identifier for an opening face.
    pub struct FaceId;
}

/// Which cap or wall of an opening's cut volume a face is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Bottom,
    Side,
}

/// A face of an opening's cut volume.
///
/// The outer loop is expressed in the face's own local 2D frame.
#[derive(Debug, Clone)]
pub struct Face {
    pub kind: FaceKind,
    /// Outer loop, absent when the face has no geometry.
    pub outer_loop: Option<Vec<Point2>>,
    /// The opening that owns this face.
    pub parent: Option<OpeningId>,
}

impl Face {
    /// Creates a parentless face.
    #[must_use]
    pub fn new(kind: FaceKind, outer_loop: Vec<Point2>) -> Self {
        Self {
            kind,
            outer_loop: Some(outer_loop),
            parent: None,
        }
    }

    /// Returns the owning opening.
    #[must_use]
    pub fn unique_parent(&self) -> Option<OpeningId> {
        self.parent
    }

    /// Returns the outer loop polygon, if any.
    #[must_use]
    pub fn outer_loop_polygon(&self) -> Option<&[Point2]> {
        self.outer_loop.as_deref()
    }

    /// A face is valid when it has a loop of at least three finite points.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outer_loop.as_ref().is_some_and(|pts| {
            pts.len() >= 3 && pts.iter().all(|p| p.x.is_finite() && p.y.is_finite())
        })
    }
}
