use std::f32::consts::PI;

use glam::Vec2;

use super::utils::rotate;

/// Half-disc fan closing one end of the ribbon.
///
/// Emits the center, then `resolution` points on the circle through
/// `edge_start`, sweeping clockwise through π. Triangles fan out from the
/// center; `start` is the index the center vertex will land on.
/// `resolution` must be at least 2.
pub fn end_cap(
    start: u32,
    center: Vec2,
    edge_start: Vec2,
    resolution: usize,
    verts: &mut Vec<Vec2>,
    tris: &mut Vec<[u32; 3]>,
) {
    verts.push(center);

    let r = edge_start - center;
    let delta = -PI / (resolution as f32 - 1.0);
    for i in 0..resolution {
        verts.push(center + rotate(r, i as f32 * delta));
    }

    for i in 0..(resolution - 1) as u32 {
        let j = start + i;
        tris.push([start, j + 1, j + 2]);
    }
}
