use bytemuck::{Pod, Zeroable};
use serde::Serialize;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable, Serialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color:    [f32; 4],
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self { position: [x, y, 0.0], color }
    }
}

#[cfg(feature = "gpu")]
impl Vertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![
            0 => Float32x3,  // position
            1 => Float32x4   // color
        ];
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as _,
            step_mode:    wgpu::VertexStepMode::Vertex,
            attributes:   &Self::ATTRIBS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * 4);
        let v = [Vertex::new(1.0, 2.0, [0.5; 4])];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 28);
    }

    #[cfg(feature = "gpu")]
    #[test]
    fn layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride, 28);
        assert_eq!(desc.attributes.len(), 2);
        assert_eq!(desc.attributes[1].offset, 12);
        assert_eq!(desc.attributes[1].shader_location, 1);
    }
}
