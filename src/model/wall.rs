use crate::error::{GeometryError, Result};
use crate::math::{Point3, Segment2, TOLERANCE};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the floor plan.
    pub struct WallId;
}

/// A straight wall segment.
///
/// The Z coordinate of both endpoints is the wall's base elevation; the
/// resolvers only ever look at its plan projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    from: Point3,
    to: Point3,
}

impl Wall {
    /// Creates a wall between two points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN/infinite coordinates and
    /// `GeometryError::Degenerate` if the plan projection has zero length.
    pub fn new(from: Point3, to: Point3) -> Result<Self> {
        if !from.iter().chain(to.iter()).all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite("wall endpoints").into());
        }
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx * dx + dy * dy < TOLERANCE * TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "zero-length wall at ({}, {})",
                from.x, from.y
            ))
            .into());
        }
        Ok(Self { from, to })
    }

    /// Returns the start point.
    #[must_use]
    pub fn from(&self) -> &Point3 {
        &self.from
    }

    /// Returns the end point.
    #[must_use]
    pub fn to(&self) -> &Point3 {
        &self.to
    }

    /// Plan projection of the wall's centerline.
    #[must_use]
    pub fn segment(&self) -> Segment2 {
        Segment2::from_points3(&self.from, &self.to)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_length() {
        let p = Point3::new(1.0, 1.0, 0.0);
        assert!(Wall::new(p, Point3::new(1.0, 1.0, 3.0)).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        let r = Wall::new(Point3::new(f64::NAN, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn segment_drops_elevation() {
        let w = Wall::new(Point3::new(0.0, 0.0, 2.5), Point3::new(3.0, 0.0, 2.5)).unwrap();
        let seg = w.segment();
        assert_eq!(seg.start, crate::math::Point2::new(0.0, 0.0));
        assert_eq!(seg.end, crate::math::Point2::new(3.0, 0.0));
    }
}
