//! Per-frame matrix computation.
//!
//! Pure functions of the surface aspect ratio and the accumulated rotation
//! angle, kept free of GPU state so they are directly testable.

use crate::math::{Mat4, Vec3};

/// Vertical field of view: 45 degrees.
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

/// Near clipping plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clipping plane distance.
pub const Z_FAR: f32 = 100.0;

/// View-axis distance of the flat square.
pub const SQUARE_DISTANCE: f32 = 6.0;

/// View-axis distance of the cube.
pub const CUBE_DISTANCE: f32 = 8.0;

/// The cube's secondary rotation runs at 0.9x the accumulated angle.
pub const TUMBLE_RATE: f32 = 0.9;

/// Axis of the cube's secondary rotation: normalized (1, 1, 0).
fn tumble_axis() -> Vec3 {
    Vec3::new(1.0, 1.0, 0.0).normalize()
}

/// Perspective projection for the current surface aspect ratio.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

/// Model-view of the flat square: pushed straight back from the camera.
pub fn square_model_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -SQUARE_DISTANCE))
}

/// Model-view of the cube for the given accumulated rotation angle.
///
/// Translate away from the camera, rotate by `angle` about Z, then by
/// `TUMBLE_RATE * angle` about the tumble axis.
pub fn cube_model_view(angle: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CUBE_DISTANCE))
        * Mat4::from_rotation_z(angle)
        * Mat4::from_axis_angle(tumble_axis(), TUMBLE_RATE * angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    fn assert_vec4_near(a: Vec4, b: Vec4) {
        for (x, y) in a.to_array().iter().zip(b.to_array()) {
            assert!((x - y).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn square_sits_six_units_down_the_view_axis() {
        let origin = square_model_view().mul_vec4(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(origin, Vec4::new(0.0, 0.0, -6.0, 1.0));
    }

    #[test]
    fn cube_center_is_rotation_invariant() {
        for angle in [0.0, 0.5, 2.0, 42.0] {
            let origin = cube_model_view(angle).mul_vec4(Vec4::new(0.0, 0.0, 0.0, 1.0));
            assert_vec4_near(origin, Vec4::new(0.0, 0.0, -8.0, 1.0));
        }
    }

    #[test]
    fn cube_model_view_at_zero_angle_is_pure_translation() {
        let mv = cube_model_view(0.0);
        let t = Mat4::from_translation(crate::math::Vec3::new(0.0, 0.0, -CUBE_DISTANCE));
        for i in 0..4 {
            assert_vec4_near(mv.cols[i], t.cols[i]);
        }
    }

    #[test]
    fn cube_rotation_preserves_vertex_distance_from_center() {
        let mv = cube_model_view(1.3);
        let corner = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let p = mv.mul_vec4(corner);
        let rel = [p.x, p.y, p.z + CUBE_DISTANCE];
        let dist = rel.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert!((dist - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn cube_secondary_rotation_runs_at_nine_tenths() {
        // A point on the tumble axis is unaffected by the secondary rotation,
        // so its image depends only on the primary Z rotation of `angle`.
        let angle = 0.8;
        let axis = tumble_axis();
        let mv = cube_model_view(angle);
        let p = mv.mul_vec4(Vec4::new(axis.x, axis.y, axis.z, 1.0));
        let expected = Mat4::from_translation(crate::math::Vec3::new(0.0, 0.0, -CUBE_DISTANCE))
            .mul_vec4(Mat4::from_rotation_z(angle).mul_vec4(Vec4::new(
                axis.x, axis.y, axis.z, 1.0,
            )));
        assert_vec4_near(p, expected);

        // Conversely, a point off the axis picks up the 0.9x secondary turn.
        let full = cube_model_view(angle);
        let composed = Mat4::from_translation(crate::math::Vec3::new(0.0, 0.0, -CUBE_DISTANCE))
            * Mat4::from_rotation_z(angle)
            * Mat4::from_axis_angle(axis, TUMBLE_RATE * angle);
        for i in 0..4 {
            assert_vec4_near(full.cols[i], composed.cols[i]);
        }
    }

    #[test]
    fn projection_uses_the_fixed_frustum_parameters() {
        let aspect = 1.5;
        let m = projection(aspect);
        let f = 1.0 / (FOV_Y / 2.0).tan();
        assert!((m.cols[0].x - f / aspect).abs() < 1e-6);
        assert!((m.cols[1].y - f).abs() < 1e-6);
        assert!((m.cols[2].z - Z_FAR / (Z_NEAR - Z_FAR)).abs() < 1e-6);
    }
}
