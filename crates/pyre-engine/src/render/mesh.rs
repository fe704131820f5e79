use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::geometry::Mesh;

/// Interleaved vertex layout shared by all mesh pipelines.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// A drawable: mesh data uploaded to GPU buffers plus the index count the
/// renderer needs for `draw_indexed`.
///
/// Buffers are destroyed on drop, so replacing a `GpuMesh` (tessellation
/// rebuild) releases the old graphics memory immediately instead of waiting
/// for wgpu's deferred cleanup.
pub struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    /// Uploads `mesh` into fresh vertex/index buffers.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices: Vec<Vertex> = mesh
            .positions
            .iter()
            .zip(&mesh.normals)
            .map(|(p, n)| Vertex { position: *p, normal: *n })
            .collect();

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vbo,
            ibo,
            index_count: mesh.indices.len() as u32,
        }
    }

    #[inline]
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vbo
    }

    #[inline]
    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.ibo
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    #[inline]
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        self.vbo.destroy();
        self.ibo.destroy();
    }
}
