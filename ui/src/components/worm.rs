use std::sync::Arc;

use crate::components::{curve::CurveGenerator, line_renderer::LineRenderer};
use crate::config::Config;
use crate::error::Result;
use crate::noise::{NoiseOracle, PerlinNoise};
use crate::render::{CpuMesh, Viewport};

/// A curve generator wired to a line renderer.
///
/// Whoever owns the render loop owns the worm and calls [`tick`](Self::tick)
/// once per frame, then hands [`mesh`](Self::mesh) to the renderer.
pub struct Worm<N = PerlinNoise> {
    curve: CurveGenerator<N>,
    line: LineRenderer,
}

impl Worm<PerlinNoise> {
    /// Worm steered by seeded Perlin noise (`config.worm.seed`).
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config, PerlinNoise::new(config.worm.seed))
    }
}

impl<N: NoiseOracle> Worm<N> {
    pub fn new(config: &Config, noise: N) -> Result<Self> {
        config.validate()?;
        let curve = CurveGenerator::new(config.worm.clone(), noise)?;
        let mut line = LineRenderer::new(config.line.clone())?;
        line.set_points(curve.points())?;
        Ok(Self { curve, line })
    }

    /// Advance by `dt` seconds; returns how many fixed steps ran.
    ///
    /// The mesh is only rebuilt when the curve actually moved.
    pub fn tick(&mut self, dt: f32) -> Result<u32> {
        let steps = self.curve.advance_steps(dt);
        if steps > 0 {
            self.line.set_points(self.curve.points())?;
        }
        Ok(steps)
    }

    /// Apply a whole new config. Both halves are validated before either
    /// one changes.
    pub fn reconfigure(&mut self, config: &Config) -> Result<()> {
        config.validate()?;
        self.curve.reconfigure(config.worm.clone())?;
        self.line.set_config(config.line.clone())?;
        self.line.set_points(self.curve.points())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.line.set_viewport(viewport)
    }

    pub fn mesh(&self) -> Arc<CpuMesh> {
        self.line.mesh()
    }

    pub fn curve(&self) -> &CurveGenerator<N> {
        &self.curve
    }

    pub fn line(&self) -> &LineRenderer {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut LineRenderer {
        &mut self.line
    }
}
