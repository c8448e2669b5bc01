//! Static CPU-side geometry for the two demo meshes.
//!
//! Kept free of GPU types so vertex counts, winding and color grouping are
//! unit-testable without a device.

use bytemuck::{Pod, Zeroable};

/// Position-only vertex used by the flat square.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FlatVertex {
    pub pos: [f32; 2],
}

impl FlatVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Position + RGBA vertex used by the cube.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The flat square, drawn as a 4-vertex triangle strip.
pub const SQUARE_VERTICES: [FlatVertex; 4] = [
    FlatVertex { pos: [1.0, 1.0] },
    FlatVertex { pos: [-1.0, 1.0] },
    FlatVertex { pos: [1.0, -1.0] },
    FlatVertex { pos: [-1.0, -1.0] },
];

/// Cube face corners, four per face, CCW when viewed from outside.
///
/// Faces in order: front, back, top, bottom, right, left.
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    [
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ],
    [
        [-1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ],
    [
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ],
    [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [-1.0, -1.0, 1.0],
    ],
    [
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [1.0, -1.0, 1.0],
    ],
    [
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [-1.0, 1.0, -1.0],
    ],
];

/// One flat color per face: white, red, green, blue, yellow, purple.
const FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

/// Two CCW triangles per face over the 24 cube vertices.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    8, 9, 10, 8, 10, 11, // top
    12, 13, 14, 12, 14, 15, // bottom
    16, 17, 18, 16, 18, 19, // right
    20, 21, 22, 20, 22, 23, // left
];

/// Builds the cube's 24 vertices: 4 corners per face, the face color
/// replicated across each run of 4 for flat shading.
pub fn cube_vertices() -> Vec<ColorVertex> {
    let mut vertices = Vec::with_capacity(24);
    for (corners, color) in CUBE_FACES.iter().zip(FACE_COLORS) {
        for &pos in corners {
            vertices.push(ColorVertex { pos, color });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_has_exactly_four_unit_corners() {
        assert_eq!(SQUARE_VERTICES.len(), 4);
        let expected = [[1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]];
        for (v, e) in SQUARE_VERTICES.iter().zip(expected) {
            assert_eq!(v.pos, e);
        }
    }

    #[test]
    fn cube_has_24_vertices_and_36_indices() {
        assert_eq!(cube_vertices().len(), 24);
        assert_eq!(CUBE_INDICES.len(), 36);
    }

    #[test]
    fn cube_colors_come_in_runs_of_four() {
        let vertices = cube_vertices();
        for face in vertices.chunks(4) {
            assert_eq!(face.len(), 4);
            for v in face {
                assert_eq!(v.color, face[0].color);
            }
        }
    }

    #[test]
    fn cube_face_colors_are_distinct() {
        let vertices = cube_vertices();
        let colors: Vec<[f32; 4]> = vertices.chunks(4).map(|f| f[0].color).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn cube_indices_describe_12_in_range_triangles() {
        assert_eq!(CUBE_INDICES.len() % 3, 0);
        assert_eq!(CUBE_INDICES.len() / 3, 12);
        for &i in &CUBE_INDICES {
            assert!((i as usize) < 24);
        }
        // Each triangle's indices stay within a single face's run of 4.
        for tri in CUBE_INDICES.chunks(3) {
            let face = tri[0] / 4;
            assert!(tri.iter().all(|&i| i / 4 == face));
        }
    }

    #[test]
    fn cube_face_corners_are_distinct_and_on_the_unit_cube() {
        for corners in &CUBE_FACES {
            for (i, a) in corners.iter().enumerate() {
                assert!(a.iter().all(|c| c.abs() == 1.0));
                for b in &corners[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn cube_faces_wind_counter_clockwise() {
        // Cross product of the first two face edges must point away from the
        // cube center (outward normal) for CCW winding viewed from outside.
        for corners in &CUBE_FACES {
            let [a, b, c, _] = corners;
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let normal = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let center: [f32; 3] = [
                corners.iter().map(|p| p[0]).sum::<f32>() / 4.0,
                corners.iter().map(|p| p[1]).sum::<f32>() / 4.0,
                corners.iter().map(|p| p[2]).sum::<f32>() / 4.0,
            ];
            let dot: f32 = normal
                .iter()
                .zip(center)
                .map(|(n, c)| n * c)
                .sum();
            assert!(dot > 0.0, "face {corners:?} winds clockwise");
        }
    }
}
