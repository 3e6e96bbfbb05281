use glam::Vec2;
use serde::Serialize;

use crate::meshes::RibbonMesh;

use super::{vertex::Vertex, viewport::Viewport};

/// What the host renderer consumes: coloured vertices plus a flat
/// triangle-list index buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CpuMesh {
    pub vertices: Vec<Vertex>,
    pub indices:  Vec<u32>,
}

impl CpuMesh {
    /// Colour every ribbon vertex and move it into the viewport's pivot space.
    pub fn from_ribbon(ribbon: &RibbonMesh, viewport: &Viewport, color: [f32; 4]) -> Self {
        let offset = viewport.pivot_offset();
        let vertices = ribbon
            .vertices
            .iter()
            .map(|&p| {
                let p: Vec2 = p - offset;
                Vertex::new(p.x, p.y, color)
            })
            .collect();

        let indices = ribbon.triangles.iter().flatten().copied().collect();

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
