use std::cell::{Cell, RefCell};

use glam::{Vec2, Vec3};
use worm_ui::{Config, CurveGenerator, NoiseOracle, PerlinNoise, Worm, WormConfig};

/// Wraps an oracle and records every sample it hands out.
struct Recording<N> {
    inner: N,
    log: RefCell<Vec<f32>>,
}

impl<N: NoiseOracle> NoiseOracle for Recording<N> {
    fn sample(&self, p: Vec3) -> f32 {
        let v = self.inner.sample(p);
        self.log.borrow_mut().push(v);
        v
    }
}

/// Plays back recorded samples in order, ignoring the coordinate.
struct Replay {
    values: Vec<f32>,
    cursor: Cell<usize>,
}

impl NoiseOracle for Replay {
    fn sample(&self, _: Vec3) -> f32 {
        let i = self.cursor.get();
        self.cursor.set(i + 1);
        self.values[i]
    }
}

fn bits(points: &[Vec2]) -> Vec<(u32, u32)> {
    points.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect()
}

const FRAME: f32 = 0.02;

#[test]
fn replaying_oracle_outputs_reproduces_the_curve() {
    let recording = Recording {
        inner: PerlinNoise::new(42),
        log: RefCell::new(Vec::new()),
    };
    let mut live = CurveGenerator::new(WormConfig::default(), recording).unwrap();
    let live_frames: Vec<_> = (0..50).map(|_| bits(live.advance(FRAME))).collect();
    let values = live.noise().log.borrow().clone();

    let replay = Replay {
        values,
        cursor: Cell::new(0),
    };
    let mut replayed = CurveGenerator::new(WormConfig::default(), replay).unwrap();
    for (frame, expected) in live_frames.iter().enumerate() {
        assert_eq!(&bits(replayed.advance(FRAME)), expected, "frame {frame}");
    }

    let replay = replayed.noise();
    assert_eq!(replay.cursor.get(), replay.values.len());
}

#[test]
fn same_seed_same_worm() {
    let cfg = Config::default();
    let mut a = Worm::from_config(&cfg).unwrap();
    let mut b = Worm::from_config(&cfg).unwrap();
    for _ in 0..120 {
        a.tick(1.0 / 60.0).unwrap();
        b.tick(1.0 / 60.0).unwrap();
    }
    assert_eq!(bits(a.curve().points()), bits(b.curve().points()));
    assert_eq!(a.mesh().as_ref(), b.mesh().as_ref());
}

#[test]
fn one_sample_per_joint_plus_head() {
    let rec = Recording {
        inner: |_: Vec3| 0.1_f32,
        log: RefCell::new(Vec::new()),
    };
    let cfg = WormConfig { segments: 7, ..WormConfig::default() };
    let mut curve = CurveGenerator::new(cfg, rec).unwrap();
    let laid_out = curve.noise().log.borrow().len();
    assert_eq!(laid_out, 8);
    curve.step();
    assert_eq!(curve.noise().log.borrow().len() - laid_out, 8);
}
