//! GPU-resident mesh buffers.
//!
//! Geometry is uploaded once at startup via `create_buffer_init` and never
//! mutated afterwards; the demos treat all meshes as immutable static data.

pub mod geometry;

use wgpu::util::DeviceExt;

use geometry::{CUBE_INDICES, SQUARE_VERTICES, cube_vertices};

struct IndexBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

/// A static mesh: one vertex buffer and an optional index buffer.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index: Option<IndexBuffer>,
    vertex_count: u32,
}

impl Mesh {
    /// Uploads the flat square: 4 vertices, no index buffer, drawn as a
    /// triangle strip.
    pub fn square(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint square vbo"),
            contents: bytemuck::cast_slice(&SQUARE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            index: None,
            vertex_count: SQUARE_VERTICES.len() as u32,
        }
    }

    /// Uploads the cube: 24 colored vertices and 36 indices forming 12
    /// triangles.
    pub fn cube(device: &wgpu::Device) -> Self {
        let vertices = cube_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint cube vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint cube ibo"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index: Some(IndexBuffer {
                buffer: index_buffer,
                count: CUBE_INDICES.len() as u32,
            }),
            vertex_count: vertices.len() as u32,
        }
    }

    /// Binds the mesh buffers and issues its draw call.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index {
            Some(index) => {
                rpass.set_index_buffer(index.buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..index.count, 0, 0..1);
            }
            None => rpass.draw(0..self.vertex_count, 0..1),
        }
    }
}
