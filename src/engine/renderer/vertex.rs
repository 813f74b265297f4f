// Vertex structure for 2D sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex for 2D sprite rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in pixels
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Four corners of a textured rectangle: top-left, top-right,
    /// bottom-right, bottom-left
    pub fn quad(position: Vec2, size: Vec2) -> [Vertex; 4] {
        [
            Vertex::new(position, Vec2::new(0.0, 0.0)),
            Vertex::new(position + Vec2::new(size.x, 0.0), Vec2::new(1.0, 0.0)),
            Vertex::new(position + size, Vec2::new(1.0, 1.0)),
            Vertex::new(position + Vec2::new(0.0, size.y), Vec2::new(0.0, 1.0)),
        ]
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Index pattern of one quad built by [`Vertex::quad`]
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
