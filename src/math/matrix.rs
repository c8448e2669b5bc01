use core::ops::Mul;

use super::{Vec3, Vec4};

/// 4x4 column-major matrix.
///
/// `cols[0]` is the first column. Column-major order matches WGSL's
/// `mat4x4<f32>`, so the raw array form uploads to a uniform buffer as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(t.x, t.y, t.z, 1.0),
        )
    }

    /// Creates a rotation of `angle` radians about the Z axis.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a rotation of `angle` radians about `axis`.
    ///
    /// `axis` must be a unit vector.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        Self::from_cols(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a right-handed perspective projection with a [0, 1] depth
    /// range, the wgpu clip-space convention.
    ///
    /// `fov_y_radians` is the vertical field of view; `aspect` is viewport
    /// width over height. `z_near` must be positive and `z_far` greater than
    /// `z_near`.
    pub fn perspective(fov_y_radians: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > z_near);
        let f = 1.0 / (fov_y_radians / 2.0).tan();

        Self::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, z_far / (z_near - z_far), -1.0),
            Vec4::new(0.0, 0.0, (z_near * z_far) / (z_near - z_far), 0.0),
        )
    }

    /// Returns the matrix columns as nested arrays, ready for uniform upload.
    #[inline]
    pub const fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
            self.cols[3].to_array(),
        ]
    }

    /// Transforms a vector by this matrix.
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z + self.cols[3] * v.w
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::from_cols(
            self.mul_vec4(rhs.cols[0]),
            self.mul_vec4(rhs.cols[1]),
            self.mul_vec4(rhs.cols[2]),
            self.mul_vec4(rhs.cols[3]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec4_near(a: Vec4, b: Vec4) {
        for (x, y) in a.to_array().iter().zip(b.to_array()) {
            assert!((x - y).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Mat4::from_translation(Vec3::new(3.0, -2.0, 5.0));
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn translation_moves_points() {
        let m = Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0));
        let p = m.mul_vec4(Vec4::new(1.0, 1.0, 0.0, 1.0));
        assert_vec4_near(p, Vec4::new(1.0, 1.0, -6.0, 1.0));
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let m = Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let p = m.mul_vec4(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_vec4_near(p, Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn axis_angle_about_z_matches_rotation_z() {
        let angle = 0.73;
        let a = Mat4::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), angle);
        let b = Mat4::from_rotation_z(angle);
        for i in 0..4 {
            assert_vec4_near(a.cols[i], b.cols[i]);
        }
    }

    #[test]
    fn axis_angle_preserves_the_axis() {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        let m = Mat4::from_axis_angle(axis, 1.2);
        let p = m.mul_vec4(Vec4::new(axis.x, axis.y, axis.z, 0.0));
        assert_vec4_near(p, Vec4::new(axis.x, axis.y, axis.z, 0.0));
    }

    #[test]
    fn perspective_matches_closed_form() {
        let fov = 45.0_f32.to_radians();
        let aspect = 640.0 / 480.0;
        let near = 0.1;
        let far = 100.0;

        let m = Mat4::perspective(fov, aspect, near, far);

        let f = 1.0 / (fov / 2.0).tan();
        assert!((m.cols[0].x - f / aspect).abs() < 1e-6);
        assert!((m.cols[1].y - f).abs() < 1e-6);
        assert!((m.cols[2].z - far / (near - far)).abs() < 1e-6);
        assert_eq!(m.cols[2].w, -1.0);
        assert!((m.cols[3].z - (near * far) / (near - far)).abs() < 1e-6);
        assert_eq!(m.cols[3].w, 0.0);

        // Off-diagonal entries are all zero.
        assert_eq!(m.cols[0].y, 0.0);
        assert_eq!(m.cols[0].z, 0.0);
        assert_eq!(m.cols[1].x, 0.0);
        assert_eq!(m.cols[3].x, 0.0);
        assert_eq!(m.cols[3].y, 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_planes_to_depth_bounds() {
        let m = Mat4::perspective(45.0_f32.to_radians(), 1.0, 0.1, 100.0);

        let near = m.mul_vec4(Vec4::new(0.0, 0.0, -0.1, 1.0));
        assert!((near.z / near.w).abs() < 1e-6);

        let far = m.mul_vec4(Vec4::new(0.0, 0.0, -100.0, 1.0));
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }
}
