//! Glint demo crate.
//!
//! Shared runtime pieces for the `square` and `cube` demo binaries: GPU
//! device/surface management, render pipelines, static mesh geometry, matrix
//! math and the winit window loop.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod scene;
