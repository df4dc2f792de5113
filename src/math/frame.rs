use std::f64::consts::FRAC_PI_2;

use nalgebra::{Isometry3, Translation3, UnitQuaternion};

use super::{Matrix4, Point2, Point3, Vector3};

/// Lifts 2D points onto the `z = 0` plane.
#[must_use]
pub fn lift(points: &[Point2]) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect()
}

/// Stands a sketch-plane outline upright into an opening's vertical frame.
///
/// Rotates +90° about X (local Y becomes Z), then lifts by half the
/// opening's height so the outline is centred on its vertical extent.
#[must_use]
pub fn stand_upright(points: &[Point3], z_length: f64) -> Vec<Point3> {
    let iso = Isometry3::from_parts(
        Translation3::new(0.0, 0.0, z_length / 2.0),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
    );
    points.iter().map(|p| iso.transform_point(p)).collect()
}

/// Transforms points by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_points(matrix: &Matrix4, points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|p| transform_point(matrix, p)).collect()
}

fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    if v.w.abs() > super::TOLERANCE && (v.w - 1.0).abs() > super::TOLERANCE {
        Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
    } else {
        Point3::new(v.x, v.y, v.z)
    }
}

/// Mirrors a loop across the local Y axis.
///
/// Negates every X coordinate and reverses the point order so the
/// mirrored loop keeps its original winding.
#[must_use]
pub fn mirror_x(points: &[Point2]) -> Vec<Point2> {
    points.iter().rev().map(|p| Point2::new(-p.x, p.y)).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::polygon_2d::signed_area;

    #[test]
    fn stand_upright_maps_y_to_z() {
        let pts = stand_upright(&[Point3::new(1.0, 2.0, 0.0)], 4.0);
        assert_relative_eq!(pts[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pts[0].z, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn transform_points_translates() {
        let m = Matrix4::new_translation(&Vector3::new(1.0, -1.0, 3.0));
        let pts = transform_points(&m, &[Point3::new(0.0, 0.0, 0.0)]);
        assert_relative_eq!(pts[0], Point3::new(1.0, -1.0, 3.0));
    }

    #[test]
    fn mirror_x_keeps_winding() {
        let tri = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let mirrored = mirror_x(&tri);
        assert_eq!(mirrored[0], Point2::new(0.0, 1.0));
        assert_eq!(mirrored[1], Point2::new(-2.0, 0.0));
        assert_eq!(mirrored[2], Point2::new(0.0, 0.0));
        assert_relative_eq!(signed_area(&mirrored), signed_area(&tri));
    }
}
