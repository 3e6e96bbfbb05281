/// Two triangles per segment of a left/right vertex ladder.
///
/// `base` is the index of the first ribbon vertex (non-zero when a start cap
/// was emitted before the strip). Each quad is split along the diagonal from
/// the left vertex of the earlier pair to the right vertex of the later one.
pub fn strip_triangles(base: u32, resolution: usize, out: &mut Vec<[u32; 3]>) {
    for i in 0..resolution.saturating_sub(1) as u32 {
        let j = base + i * 2;
        out.push([j, j + 2, j + 3]);
        out.push([j, j + 3, j + 1]);
    }
}
