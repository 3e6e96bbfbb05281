use std::sync::Arc;

use glam::Vec2;

use crate::config::{validate_thickness, LineConfig};
use crate::error::{Result, WormError};
use crate::meshes::{scale::scale, RibbonMesh, RibbonTessellator};
use crate::render::{CpuMesh, Viewport};

/// Turns a point sequence into a ready-to-draw mesh and keeps the last good
/// one around.
///
/// The published mesh is an immutable snapshot: each recompute builds a new
/// [`CpuMesh`] and swaps the `Arc`, so a renderer holding the previous one is
/// never affected.
pub struct LineRenderer {
    config: LineConfig,
    tessellator: RibbonTessellator,
    viewport: Viewport,

    positions: Vec<Vec2>,
    ribbon: RibbonMesh,
    mesh: Arc<CpuMesh>,
}

impl LineRenderer {
    pub fn new(config: LineConfig) -> Result<Self> {
        config.validate()?;
        let tessellator = RibbonTessellator::new(config.cap_resolution)?;
        Ok(Self {
            config,
            tessellator,
            viewport: Viewport::default(),
            positions: Vec::new(),
            ribbon: RibbonMesh::default(),
            mesh: Arc::new(CpuMesh::default()),
        })
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Input points as last accepted by [`set_points`](Self::set_points).
    pub fn points(&self) -> &[Vec2] {
        &self.positions
    }

    /// Raw ribbon geometry behind the current mesh, before colour and pivot.
    pub fn ribbon(&self) -> &RibbonMesh {
        &self.ribbon
    }

    /// Current snapshot for the host renderer.
    pub fn mesh(&self) -> Arc<CpuMesh> {
        Arc::clone(&self.mesh)
    }

    /// Replace the input and rebuild.
    ///
    /// Fewer than two points leaves both the input and the published mesh
    /// untouched; the error is still returned so the caller can react.
    pub fn set_points(&mut self, points: &[Vec2]) -> Result<()> {
        if points.len() < 2 {
            log::warn!("line renderer needs at least 2 points, got {}", points.len());
            return Err(WormError::InsufficientPoints { len: points.len() });
        }

        self.positions.clear();
        self.positions.extend_from_slice(points);
        self.recompute()
    }

    pub fn set_thickness(&mut self, thickness: f32) -> Result<()> {
        validate_thickness(thickness)?;
        self.config.thickness = thickness;
        self.recompute()
    }

    pub fn set_end_caps(&mut self, enabled: bool) -> Result<()> {
        self.config.end_caps = enabled;
        self.recompute()
    }

    pub fn set_scale_to_viewport(&mut self, enabled: bool) -> Result<()> {
        self.config.scale_to_viewport = enabled;
        self.recompute()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        self.recompute()
    }

    pub fn set_color(&mut self, color: [f32; 4]) -> Result<()> {
        self.config.color = color;
        self.recompute()
    }

    /// Swap every line setting at once; nothing changes if `config` is invalid.
    pub fn set_config(&mut self, config: LineConfig) -> Result<()> {
        config.validate()?;
        self.tessellator = RibbonTessellator::new(config.cap_resolution)?;
        self.config = config;
        self.recompute()
    }

    /// Rebuild the mesh from the current input and settings.
    ///
    /// A no-op until points have been supplied.
    pub fn recompute(&mut self) -> Result<()> {
        if self.positions.is_empty() {
            log::debug!("line renderer has no points yet, skipping recompute");
            return Ok(());
        }

        let ribbon = if self.config.scale_to_viewport {
            let scaled = scale(&self.positions, self.viewport.size);
            self.tessellator
                .tessellate(&scaled, self.config.thickness, self.config.end_caps)?
        } else {
            self.tessellator
                .tessellate(&self.positions, self.config.thickness, self.config.end_caps)?
        };

        let mesh = CpuMesh::from_ribbon(&ribbon, &self.viewport, self.config.color);
        log::debug!(
            "ribbon rebuilt: {} points -> {} vertices, {} triangles",
            self.positions.len(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );

        self.ribbon = ribbon;
        self.mesh = Arc::new(mesh);
        Ok(())
    }
}
