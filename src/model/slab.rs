use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a slab in the floor plan.
    pub struct SlabId;
}

slotmap::new_key_type! {
    /// Unique identifier for a slab's top face.
    pub struct TopFaceId;
}

/// A floor/ceiling slab.
///
/// Holds its top faces in drawing order; the first face whose outline
/// contains a point is the one that owns it.
#[derive(Debug, Clone, Default)]
pub struct Slab {
    pub top_faces: Vec<TopFaceId>,
}

/// One top face of a slab.
#[derive(Debug, Clone)]
pub struct TopFace {
    /// Outer loop in plan coordinates.
    pub outer: Vec<Point2>,
}
