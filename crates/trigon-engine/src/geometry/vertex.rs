use bytemuck::{Pod, Zeroable};

/// Position-only vertex: three tightly packed `f32` (x, y, z).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
}

impl Vertex {
    /// Shader location of the position attribute.
    pub const POSITION_LOCATION: u32 = 0;

    const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![Self::POSITION_LOCATION => Float32x3];

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { pos: [x, y, z] }
    }

    /// Buffer layout for a vertex-stepped buffer of `Vertex`.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    pub fn distance(self, other: Vertex) -> f32 {
        let [ax, ay, az] = self.pos;
        let [bx, by, bz] = other.pos;
        ((ax - bx).powi(2) + (ay - by).powi(2) + (az - bz).powi(2)).sqrt()
    }
}
