use glam::Vec2;
use rayon::prelude::*;

use crate::config::{validate_cap_resolution, validate_thickness};
use crate::error::{Result, WormError};

use super::caps::end_cap;
use super::strip::strip_triangles;
use super::utils::point_normal;
use super::PAR_MIN_LEN;

pub const DEFAULT_CAP_RESOLUTION: usize = 16;

/// Triangulated ribbon in emission order.
///
/// With caps the layout is `[start cap | strip | end cap]`; the strip always
/// holds `2 * resolution` vertices as `(left, right)` pairs. Triangles wind
/// clockwise in a y-up frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RibbonMesh {
    pub vertices: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
}

impl RibbonMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Turns an ordered polyline into a thick ribbon with optional round caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonTessellator {
    cap_resolution: usize,
}

impl Default for RibbonTessellator {
    fn default() -> Self {
        Self {
            cap_resolution: DEFAULT_CAP_RESOLUTION,
        }
    }
}

impl RibbonTessellator {
    pub fn new(cap_resolution: usize) -> Result<Self> {
        validate_cap_resolution(cap_resolution)?;
        Ok(Self { cap_resolution })
    }

    pub fn cap_resolution(&self) -> usize {
        self.cap_resolution
    }

    /// Vertices added by both caps together.
    pub fn cap_vertex_count(&self) -> usize {
        2 * (self.cap_resolution + 1)
    }

    pub fn tessellate(&self, points: &[Vec2], thickness: f32, caps: bool) -> Result<RibbonMesh> {
        let resolution = points.len();
        if resolution < 2 {
            return Err(WormError::InsufficientPoints { len: resolution });
        }
        validate_thickness(thickness)?;

        // offsets read every normal, so this pass must finish first
        let normals = normals(points);
        let ribbon = offset_vertices(points, &normals, thickness * 0.5);

        let cap_len = self.cap_resolution + 1;
        let vertex_total = ribbon.len() + if caps { 2 * cap_len } else { 0 };
        let triangle_total = 2 * (resolution - 1)
            + if caps { 2 * (self.cap_resolution - 1) } else { 0 };

        let mut vertices = Vec::with_capacity(vertex_total);
        let mut triangles = Vec::with_capacity(triangle_total);

        if caps {
            end_cap(0, points[0], ribbon[1], self.cap_resolution, &mut vertices, &mut triangles);
        }

        let base = vertices.len() as u32;
        vertices.extend_from_slice(&ribbon);
        strip_triangles(base, resolution, &mut triangles);

        if caps {
            let start = vertices.len() as u32;
            end_cap(
                start,
                points[resolution - 1],
                ribbon[2 * resolution - 2],
                self.cap_resolution,
                &mut vertices,
                &mut triangles,
            );
        }

        debug_assert_eq!(vertices.len(), vertex_total);
        debug_assert_eq!(triangles.len(), triangle_total);

        Ok(RibbonMesh { vertices, triangles })
    }
}

/// Per-point averaged normals.
pub fn normals(points: &[Vec2]) -> Vec<Vec2> {
    (0..points.len())
        .into_par_iter()
        .with_min_len(PAR_MIN_LEN)
        .map(|i| point_normal(points, i))
        .collect()
}

/// Left/right offsets for every point, interleaved.
pub fn offset_vertices(points: &[Vec2], normals: &[Vec2], half_width: f32) -> Vec<Vec2> {
    points
        .par_iter()
        .zip(normals.par_iter())
        .with_min_len(PAR_MIN_LEN)
        .flat_map_iter(|(&p, &n)| {
            let off = n * half_width;
            [p + off, p - off]
        })
        .collect()
}
