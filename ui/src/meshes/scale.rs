use glam::Vec2;
use rayon::prelude::*;

use super::PAR_MIN_LEN;

/// Multiply every point by `factor` (usually the viewport size).
pub fn scale(points: &[Vec2], factor: Vec2) -> Vec<Vec2> {
    points
        .par_iter()
        .with_min_len(PAR_MIN_LEN)
        .map(|&p| p * factor)
        .collect()
}
