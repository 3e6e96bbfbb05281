use std::{env, io::Write};

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use worm_ui::{Config, Viewport, Worm};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 300;

fn load_config() -> Result<Config> {
    let path = env::args().nth(1).or_else(|| env::var("WORM_CONFIG").ok());
    match path {
        Some(path) => {
            info!("loading config from {path}");
            Config::load(&path).with_context(|| format!("loading {path}"))
        }
        None => {
            info!("no config given, using defaults");
            Ok(Config::default())
        }
    }
}

fn frame_count() -> Result<u32> {
    match env::var("WORM_FRAMES") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("WORM_FRAMES must be a frame count, got {raw:?}")),
        Err(_) => Ok(DEFAULT_FRAMES),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let frames = frame_count()?;

    let mut worm = Worm::from_config(&config).context("building worm")?;
    worm.set_viewport(Viewport::new(Vec2::new(1280.0, 720.0), Vec2::splat(0.5)))?;

    // simulated clock, no sleeping: this only exercises the pipeline
    for frame in 0..frames {
        let steps = worm.tick(FRAME_DT)?;
        if steps > 0 {
            let mesh = worm.mesh();
            debug!(
                "frame {frame}: {steps} step(s), {} vertices, {} triangles",
                mesh.vertices.len(),
                mesh.triangle_count()
            );
        }
        if frame % 60 == 0 {
            info!("frame {frame}, head at {}", worm.curve().head());
        }
    }

    let mesh = worm.mesh();
    info!(
        "done after {} curve steps: {} vertices, {} triangles",
        worm.curve().steps(),
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    let mut out = std::io::stdout().lock();
    serde_json::to_writer(&mut out, mesh.as_ref()).context("writing mesh")?;
    writeln!(out)?;
    Ok(())
}
