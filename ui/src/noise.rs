use glam::Vec3;
use noise::{NoiseFn, Perlin};

/// Deterministic scalar field sampled by the curve generator.
///
/// Implementations must be total and roughly bounded to [-1, 1].
pub trait NoiseOracle {
    fn sample(&self, p: Vec3) -> f32;
}

impl<F> NoiseOracle for F
where
    F: Fn(Vec3) -> f32,
{
    fn sample(&self, p: Vec3) -> f32 {
        self(p)
    }
}

/// Seeded classic Perlin noise.
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseOracle for PerlinNoise {
    fn sample(&self, p: Vec3) -> f32 {
        self.perlin.get([p.x as f64, p.y as f64, p.z as f64]) as f32
    }
}
