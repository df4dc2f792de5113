use nalgebra::Rotation3;

use crate::math::{Matrix4, Vector3};
use crate::model::{Layer, Opening};

/// Supplies the world placement of openings.
pub trait WorldTransform {
    /// Full world matrix of `opening` placed on `layer`.
    fn world_matrix(&self, opening: &Opening, layer: Option<&Layer>) -> Matrix4;

    /// Elevation of a layer's floor.
    fn altitude(&self, layer: &Layer) -> f64 {
        layer.altitude
    }
}

/// Places an opening from its own attributes: plan position, elevation
/// above the layer, rotation about Z and non-uniform scale. `flip` mirrors
/// the local Y axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementTransform;

impl WorldTransform for PlacementTransform {
    fn world_matrix(&self, opening: &Opening, layer: Option<&Layer>) -> Matrix4 {
        let altitude = layer.map_or(0.0, |l| self.altitude(l));
        let translation = Matrix4::new_translation(&Vector3::new(
            opening.position.x,
            opening.position.y,
            altitude + opening.z.unwrap_or(0.0),
        ));
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), opening.rotation).to_homogeneous();
        let y_sign = if opening.flip { -1.0 } else { 1.0 };
        let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(
            opening.x_scale,
            opening.y_scale * y_sign,
            1.0,
        ));
        translation * rotation * scale
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::frame::transform_points;
    use crate::math::{Point2, Point3};
    use crate::model::OpeningKind;

    #[test]
    fn scale_rotate_translate_order() {
        let mut o = Opening::new(OpeningKind::Door, Point2::new(10.0, 20.0));
        o.x_scale = 2.0;
        o.rotation = FRAC_PI_2;
        o.z = Some(0.5);
        let layer = Layer::new(3.0);

        let m = PlacementTransform.world_matrix(&o, Some(&layer));
        let p = transform_points(&m, &[Point3::new(1.0, 0.0, 0.0)]);
        // (1,0,0) -> scaled (2,0,0) -> rotated (0,2,0) -> placed.
        assert_relative_eq!(p[0].x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p[0].y, 22.0, epsilon = 1e-12);
        assert_relative_eq!(p[0].z, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn flip_mirrors_local_y() {
        let mut o = Opening::new(OpeningKind::Window, Point2::origin());
        o.flip = true;
        let m = PlacementTransform.world_matrix(&o, None);
        let p = transform_points(&m, &[Point3::new(0.0, 1.0, 0.0)]);
        assert_relative_eq!(p[0].y, -1.0, epsilon = 1e-12);
    }
}
