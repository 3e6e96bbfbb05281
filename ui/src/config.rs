use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WormError};

/// Everything needed to build a [`Worm`](crate::components::worm::Worm).
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub worm: WormConfig,
    pub line: LineConfig,
}

/// Curve generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WormConfig {
    pub segments: usize,
    pub segment_length: f32,
    pub move_speed: f32,
    pub squirm_speed: f32,
    /// 0 keeps the worm straight, 1 allows a full turn per noise unit.
    pub twistiness: f32,
    /// Seconds of simulated time per curve step.
    pub fixed_timestep: f32,
    pub max_steps_per_advance: u32,
    pub seed: u32,
}

impl Default for WormConfig {
    fn default() -> Self {
        Self {
            segments: 10,
            segment_length: 0.1,
            move_speed: 0.1,
            squirm_speed: 0.1,
            twistiness: 0.35,
            fixed_timestep: 0.02,
            max_steps_per_advance: 8,
            seed: 0,
        }
    }
}

/// Ribbon / line renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub thickness: f32,
    pub end_caps: bool,
    pub scale_to_viewport: bool,
    /// Arc vertices per end cap.
    pub cap_resolution: usize,
    pub color: [f32; 4],
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            thickness: 0.015,
            end_caps: true,
            scale_to_viewport: true,
            cap_resolution: 16,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl Config {
    pub fn from_json_str(src: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&src)
    }

    pub fn validate(&self) -> Result<()> {
        self.worm.validate()?;
        self.line.validate()
    }
}

impl WormConfig {
    pub fn validate(&self) -> Result<()> {
        if self.segments < 1 {
            return Err(WormError::invalid("segments", "must be at least 1"));
        }
        positive("segment_length", self.segment_length)?;
        finite("move_speed", self.move_speed)?;
        finite("squirm_speed", self.squirm_speed)?;
        if !(0.0..=1.0).contains(&self.twistiness) {
            return Err(WormError::invalid(
                "twistiness",
                format!("must be within [0, 1], got {}", self.twistiness),
            ));
        }
        positive("fixed_timestep", self.fixed_timestep)?;
        if self.max_steps_per_advance < 1 {
            return Err(WormError::invalid("max_steps_per_advance", "must be at least 1"));
        }
        Ok(())
    }
}

impl LineConfig {
    pub fn validate(&self) -> Result<()> {
        validate_thickness(self.thickness)?;
        validate_cap_resolution(self.cap_resolution)
    }
}

pub(crate) fn validate_thickness(thickness: f32) -> Result<()> {
    positive("thickness", thickness)
}

pub(crate) fn validate_cap_resolution(cap_resolution: usize) -> Result<()> {
    if cap_resolution < 2 {
        return Err(WormError::invalid(
            "cap_resolution",
            format!("must be at least 2, got {cap_resolution}"),
        ));
    }
    Ok(())
}

fn positive(field: &'static str, v: f32) -> Result<()> {
    // NaN fails this comparison too
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(WormError::invalid(field, format!("must be a positive number, got {v}")))
    }
}

fn finite(field: &'static str, v: f32) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(WormError::invalid(field, format!("must be finite, got {v}")))
    }
}
