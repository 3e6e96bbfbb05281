//! Procedurally animated worm drawn as a thick, round-capped ribbon.
//!
//! [`components::CurveGenerator`] walks a chain of points through a noise
//! field, [`meshes::RibbonTessellator`] turns any polyline into triangles,
//! and [`components::LineRenderer`] publishes ready-to-draw [`render::CpuMesh`]
//! snapshots. [`components::Worm`] wires the three together behind a single
//! `tick(dt)`.

pub mod components;
pub mod config;
pub mod error;
pub mod meshes;
pub mod noise;
pub mod render;

pub use crate::components::{CurveGenerator, LineRenderer, Worm};
pub use crate::config::{Config, LineConfig, WormConfig};
pub use crate::error::{Result, WormError};
pub use crate::meshes::{RibbonMesh, RibbonTessellator};
pub use crate::noise::{NoiseOracle, PerlinNoise};
pub use crate::render::{CpuMesh, Vertex, Viewport};
