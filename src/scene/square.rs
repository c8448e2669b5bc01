use anyhow::Result;

use crate::device::{Gpu, GpuFrame};
use crate::mesh::Mesh;
use crate::mesh::geometry::FlatVertex;
use crate::pipeline::{MeshPipeline, MeshPipelineDesc};

use super::pass::begin_clear_pass;
use super::transform;

/// The static flat-square demo scene.
pub struct SquareScene {
    pipeline: MeshPipeline,
    mesh: Mesh,
}

impl SquareScene {
    /// Compiles the flat program and uploads the square's vertex buffer.
    ///
    /// Any compile/link failure aborts scene construction.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        let pipeline = MeshPipeline::new(
            device,
            surface_format,
            MeshPipelineDesc {
                label: "glint square pipeline",
                shader_source: include_str!("shaders/flat.wgsl"),
                vertex_layout: FlatVertex::layout(),
                topology: wgpu::PrimitiveTopology::TriangleStrip,
            },
        )?;

        Ok(Self {
            pipeline,
            mesh: Mesh::square(device),
        })
    }

    /// Records one frame: clear, upload matrices, bind, strip draw.
    pub fn render(&self, gpu: &Gpu<'_>, frame: &mut GpuFrame) {
        self.pipeline.write_matrices(
            gpu.queue(),
            transform::projection(gpu.aspect_ratio()),
            transform::square_model_view(),
        );

        let mut rpass = begin_clear_pass(
            &mut frame.encoder,
            &frame.view,
            gpu.depth_view(),
            "glint square pass",
        );
        self.pipeline.bind(&mut rpass);
        self.mesh.draw(&mut rpass);
    }
}
