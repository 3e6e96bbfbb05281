use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::config::WormConfig;
use crate::error::Result;
use crate::meshes::utils::rotate;
use crate::noise::NoiseOracle;

/// Where a fresh worm's head starts, in normalized viewport space.
pub const START_HEAD: Vec3 = Vec3::new(0.5, 0.5, 0.0);

/// Noise-steered chain of points.
///
/// Every step the head drifts forward and through the noise field's z axis;
/// the trailing segments are then re-derived from scratch by walking the
/// chain and turning by the noise sampled at each previous joint.
pub struct CurveGenerator<N> {
    noise: N,
    config: WormConfig,

    head: Vec3,
    chain: Vec<Vec3>,
    points: Vec<Vec2>,

    move_vector: Vec3,
    squirm_vector: Vec3,

    accumulator: f32,
    steps: u64,
}

impl<N: NoiseOracle> CurveGenerator<N> {
    pub fn new(config: WormConfig, noise: N) -> Result<Self> {
        config.validate()?;
        let len = config.segments + 1;
        let (move_vector, squirm_vector) = drift_vectors(&config);

        log::info!(
            "curve generator: {} segments of {} (twistiness {})",
            config.segments,
            config.segment_length,
            config.twistiness
        );

        let mut curve = Self {
            noise,
            config,
            head: START_HEAD,
            chain: vec![Vec3::ZERO; len],
            points: vec![Vec2::ZERO; len],
            move_vector,
            squirm_vector,
            accumulator: 0.0,
            steps: 0,
        };
        curve.rebuild_chain();
        Ok(curve)
    }

    pub fn config(&self) -> &WormConfig {
        &self.config
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn head(&self) -> Vec3 {
        self.head
    }

    /// Latest 2D projection of the chain, laid out from [`START_HEAD`] until
    /// the first step.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Feed `dt` seconds into the fixed-step clock and return the points.
    pub fn advance(&mut self, dt: f32) -> &[Vec2] {
        self.advance_steps(dt);
        &self.points
    }

    /// Like [`advance`](Self::advance) but reports how many steps ran.
    pub fn advance_steps(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        let step_dt = self.config.fixed_timestep;
        let max_steps = self.config.max_steps_per_advance;

        self.accumulator += dt;
        let mut taken = 0;
        while self.accumulator >= step_dt && taken < max_steps {
            self.step();
            self.accumulator -= step_dt;
            taken += 1;
        }

        if self.accumulator >= step_dt {
            log::warn!(
                "curve generator fell behind, dropping {:.3}s of simulation",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        taken
    }

    /// Run exactly one fixed step.
    pub fn step(&mut self) -> &[Vec2] {
        self.head += self.move_vector;
        self.head += self.squirm_vector;
        self.rebuild_chain();
        self.steps += 1;
        &self.points
    }

    /// Apply new settings, keeping the head where it is. The chain is
    /// re-derived immediately.
    pub fn reconfigure(&mut self, config: WormConfig) -> Result<()> {
        config.validate()?;
        let len = config.segments + 1;
        (self.move_vector, self.squirm_vector) = drift_vectors(&config);
        self.config = config;

        self.chain.resize(len, Vec3::ZERO);
        self.points.resize(len, Vec2::ZERO);
        self.accumulator = 0.0;
        self.rebuild_chain();

        log::info!("curve generator reconfigured: {} segments", self.config.segments);
        Ok(())
    }

    fn rebuild_chain(&mut self) {
        let twist = TAU * self.config.twistiness;
        let segment = Vec2::new(self.config.segment_length, 0.0);

        self.chain[0] = self.head;
        self.points[0] = self.head.truncate();

        let mut angle = self.noise.sample(self.head) * twist;
        for i in 1..self.chain.len() {
            let prev = self.chain[i - 1];
            let pos = prev.truncate() + rotate(segment, angle);
            angle += self.noise.sample(prev) * twist;

            self.points[i] = pos;
            self.chain[i] = pos.extend(prev.z);
        }
    }
}

fn drift_vectors(config: &WormConfig) -> (Vec3, Vec3) {
    (
        Vec3::new(config.move_speed * 0.001, 0.0, 0.0),
        Vec3::new(0.0, 0.0, config.squirm_speed),
    )
}
