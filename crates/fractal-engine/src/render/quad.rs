//! Static full-screen quad.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 3], // NDC, z = 0
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Two counter-clockwise triangles covering NDC [-1, 1]², sharing the
/// bottom-left and top-right corners.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { pos: [-1.0, -1.0, 0.0] }, // bottom left
    QuadVertex { pos: [1.0, -1.0, 0.0] },  // bottom right
    QuadVertex { pos: [1.0, 1.0, 0.0] },   // top right
    QuadVertex { pos: [-1.0, -1.0, 0.0] }, // bottom left
    QuadVertex { pos: [1.0, 1.0, 0.0] },   // top right
    QuadVertex { pos: [-1.0, 1.0, 0.0] },  // top left
];

/// GPU-resident copy of [`QUAD_VERTICES`].
///
/// Uploaded once; the buffer is never written again.
pub struct QuadMesh {
    vbo: wgpu::Buffer,
}

impl QuadMesh {
    pub const VERTEX_COUNT: u32 = QUAD_VERTICES.len() as u32;

    pub fn new(device: &wgpu::Device) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fullscreen quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { vbo }
    }

    /// Binds the vertex buffer at slot 0 and draws both triangles.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.draw(0..Self::VERTEX_COUNT, 0..1);
    }
}
