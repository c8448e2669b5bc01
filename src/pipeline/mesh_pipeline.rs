use anyhow::{Result, bail};
use bytemuck::{Pod, Zeroable};

use crate::device::DEPTH_FORMAT;
use crate::math::Mat4;

use super::shader;

/// Projection + model-view uniform block.
///
/// Matches the `Matrices` struct declared by both WGSL programs; mat4x4
/// columns are uploaded in column-major order.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MatrixUniform {
    projection: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
}

/// Parameters for building a [`MeshPipeline`].
pub struct MeshPipelineDesc<'a> {
    pub label: &'a str,
    pub shader_source: &'a str,
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
    pub topology: wgpu::PrimitiveTopology,
}

/// A linked render pipeline plus its resolved uniform bindings.
///
/// Created exactly once per mesh at startup. The matrix uniform buffer and
/// bind group are fixed here and reused every frame without re-binding setup.
pub struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,
    matrix_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl MeshPipeline {
    /// Compiles the WGSL program and links the render pipeline.
    ///
    /// Both steps run inside validation error scopes so a rejected shader or
    /// an inconsistent pipeline surfaces as an `Err` with the driver
    /// diagnostic instead of a device panic. Either failure aborts
    /// initialization; there is no fallback pipeline.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        desc: MeshPipelineDesc<'_>,
    ) -> Result<Self> {
        let module = shader::compile(device, desc.label, desc.shader_source)?;

        let matrix_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint matrix ubo"),
            size: std::mem::size_of::<MatrixUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("glint matrix bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<MatrixUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint matrix bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: matrix_ubo.as_entire_binding(),
            }],
        });

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[desc.vertex_layout],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            // Nearer fragments occlude farther ones; equal depth passes.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            bail!("pipeline {:?} failed to link: {err}", desc.label);
        }

        Ok(Self {
            pipeline,
            matrix_ubo,
            bind_group,
        })
    }

    /// Uploads the per-frame projection and model-view matrices.
    pub fn write_matrices(&self, queue: &wgpu::Queue, projection: Mat4, model_view: Mat4) {
        let u = MatrixUniform {
            projection: projection.to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
        };
        queue.write_buffer(&self.matrix_ubo, 0, bytemuck::bytes_of(&u));
    }

    /// Activates the pipeline and its uniform bind group on a render pass.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
    }
}
