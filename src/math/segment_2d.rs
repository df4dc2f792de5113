use super::{flatten, Point2, Point3, Vector2, TOLERANCE};

/// A bounded line segment in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from 3D endpoints, dropping Z.
    #[must_use]
    pub fn from_points3(start: &Point3, end: &Point3) -> Self {
        Self::new(flatten(start), flatten(end))
    }

    /// Returns the (unnormalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Parameter of the projection of `p` onto the supporting line.
    ///
    /// `0` maps to `start`, `1` maps to `end`. Not clamped.
    #[must_use]
    pub fn param_of(&self, p: &Point2) -> f64 {
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return 0.0;
        }
        (p - self.start).dot(&d) / len_sq
    }

    /// Returns the point on the segment closest to `p`.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        let t = self.param_of(p).clamp(0.0, 1.0);
        self.start + self.direction() * t
    }

    /// Squared distance from `p` to the segment.
    #[must_use]
    pub fn distance_sq(&self, p: &Point2) -> f64 {
        (p - self.closest_point(p)).norm_squared()
    }

    /// Distance from `p` to the infinite supporting line.
    #[must_use]
    pub fn distance_to_line(&self, p: &Point2) -> f64 {
        let d = self.direction();
        let len = d.norm();
        if len < TOLERANCE {
            return (p - self.start).norm();
        }
        let w = p - self.start;
        (d.x * w.y - d.y * w.x).abs() / len
    }

    /// Returns `true` if `p` lies on the segment, endpoints included.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tolerance: f64) -> bool {
        self.distance_sq(p) <= tolerance * tolerance
    }

    /// Returns `true` if `p` lies on the segment's interior.
    ///
    /// Points within `tolerance` of either endpoint are rejected.
    #[must_use]
    pub fn contains_point_strictly(&self, p: &Point2, tolerance: f64) -> bool {
        if self.distance_to_line(p) > tolerance {
            return false;
        }
        let len = self.length_sq().sqrt();
        if len < TOLERANCE {
            return false;
        }
        let along = self.param_of(p) * len;
        along > tolerance && along < len - tolerance
    }

    /// "Same line" test: `other` is collinear with this segment and their
    /// extents overlap. Segments that only touch end-to-end count as
    /// overlapping.
    #[must_use]
    pub fn is_same_line(&self, other: &Segment2, tolerance: f64) -> bool {
        if self.distance_to_line(&other.start) > tolerance
            || self.distance_to_line(&other.end) > tolerance
        {
            return false;
        }
        let len = self.length_sq().sqrt();
        if len < TOLERANCE {
            return false;
        }
        let t0 = self.param_of(&other.start);
        let t1 = self.param_of(&other.end);
        let slack = tolerance / len;
        t0.max(t1) >= -slack && t0.min(t1) <= 1.0 + slack
    }

    /// Distance from `p` to whichever endpoint is nearer.
    #[must_use]
    pub fn nearer_endpoint_distance(&self, p: &Point2) -> f64 {
        (p - self.start).norm().min((p - self.end).norm())
    }
}

/// Returns the point on segment `a`–`b` closest to `p`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    Segment2::new(*a, *b).closest_point(p)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-6;

    fn x_axis() -> Segment2 {
        Segment2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0))
    }

    #[test]
    fn closest_point_perpendicular_projection() {
        let c = x_axis().closest_point(&Point2::new(1.0, 1.0));
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(x_axis().distance_sq(&Point2::new(1.0, 1.0)), 1.0);
    }

    #[test]
    fn closest_point_clamps_to_endpoint() {
        let c = closest_point_on_segment(
            &Point2::new(-1.0, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn strict_containment_excludes_endpoints() {
        let seg = x_axis();
        assert!(seg.contains_point_strictly(&Point2::new(1.0, 0.0), TOL));
        assert!(!seg.contains_point_strictly(&Point2::new(0.0, 0.0), TOL));
        assert!(!seg.contains_point_strictly(&Point2::new(2.0, 0.0), TOL));
        assert!(!seg.contains_point_strictly(&Point2::new(1.0, 0.1), TOL));
    }

    #[test]
    fn non_strict_containment_includes_endpoints() {
        let seg = x_axis();
        assert!(seg.contains_point(&Point2::new(0.0, 0.0), TOL));
        assert!(seg.contains_point(&Point2::new(2.0, 0.0), TOL));
        assert!(!seg.contains_point(&Point2::new(2.1, 0.0), TOL));
    }

    #[test]
    fn same_line_requires_collinear_overlap() {
        let seg = x_axis();
        let overlapping = Segment2::new(Point2::new(1.0, 0.0), Point2::new(5.0, 0.0));
        let touching = Segment2::new(Point2::new(2.0, 0.0), Point2::new(3.0, 0.0));
        let disjoint = Segment2::new(Point2::new(3.0, 0.0), Point2::new(4.0, 0.0));
        let parallel = Segment2::new(Point2::new(0.0, 1.0), Point2::new(2.0, 1.0));
        assert!(seg.is_same_line(&overlapping, TOL));
        assert!(seg.is_same_line(&touching, TOL));
        assert!(!seg.is_same_line(&disjoint, TOL));
        assert!(!seg.is_same_line(&parallel, TOL));
    }

    #[test]
    fn same_line_ignores_direction() {
        let reversed = Segment2::new(Point2::new(1.5, 0.0), Point2::new(0.5, 0.0));
        assert!(x_axis().is_same_line(&reversed, TOL));
    }

    #[test]
    fn nearer_endpoint() {
        let d = x_axis().nearer_endpoint_distance(&Point2::new(2.0, 1.0));
        assert_relative_eq!(d, 1.0);
    }
}
