//! Minimal 3D math used by the demos.
//!
//! Column-major matrices matching WGSL's `mat4x4<f32>` layout, so
//! [`Mat4::to_cols_array_2d`] can be uploaded to a uniform buffer directly.

mod matrix;
mod vector;

pub use matrix::Mat4;
pub use vector::{Vec3, Vec4};
