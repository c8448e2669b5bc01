use anyhow::Result;

use crate::device::{Gpu, GpuFrame};
use crate::mesh::Mesh;
use crate::mesh::geometry::ColorVertex;
use crate::pipeline::{MeshPipeline, MeshPipelineDesc};

use super::pass::begin_clear_pass;
use super::spin::Spin;
use super::transform;

/// The rotating colored-cube demo scene.
pub struct CubeScene {
    pipeline: MeshPipeline,
    mesh: Mesh,
    spin: Spin,
}

impl CubeScene {
    /// Compiles the vertex-color program and uploads the cube's vertex and
    /// index buffers.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        let pipeline = MeshPipeline::new(
            device,
            surface_format,
            MeshPipelineDesc {
                label: "glint cube pipeline",
                shader_source: include_str!("shaders/vertex_color.wgsl"),
                vertex_layout: ColorVertex::layout(),
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        )?;

        Ok(Self {
            pipeline,
            mesh: Mesh::cube(device),
            spin: Spin::new(),
        })
    }

    /// Advances the rotation by `dt` seconds and records one frame: clear,
    /// upload matrices, bind, indexed draw over the 36 indices.
    pub fn render(&mut self, gpu: &Gpu<'_>, frame: &mut GpuFrame, dt: f32) {
        self.spin.advance(dt);

        self.pipeline.write_matrices(
            gpu.queue(),
            transform::projection(gpu.aspect_ratio()),
            transform::cube_model_view(self.spin.angle()),
        );

        let mut rpass = begin_clear_pass(
            &mut frame.encoder,
            &frame.view,
            gpu.depth_view(),
            "glint cube pass",
        );
        self.pipeline.bind(&mut rpass);
        self.mesh.draw(&mut rpass);
    }
}
