pub mod frame;
pub mod polygon_2d;
pub mod segment_2d;

pub use segment_2d::Segment2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `a` and `b` differ by at most `tolerance`.
#[must_use]
pub fn nearly_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Drops the Z coordinate of a 3D point.
#[must_use]
pub fn flatten(p: &Point3) -> Point2 {
    Point2::new(p.x, p.y)
}
