//! Shader compilation and render pipeline setup.
//!
//! A [`MeshPipeline`] pairs a compiled WGSL program with its matrix uniform
//! buffer and bind group. It is the analog of the classic "program info"
//! record: built once at startup, immutable afterwards, with attribute and
//! uniform bindings fixed at pipeline creation.

mod mesh_pipeline;
mod shader;

pub use mesh_pipeline::{MeshPipeline, MeshPipelineDesc};
