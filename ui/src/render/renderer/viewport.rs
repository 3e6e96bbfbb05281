use glam::Vec2;

/// The host rectangle the worm is drawn into.
///
/// `pivot` is normalized (0,0 = bottom-left, 0.5,0.5 = center); every emitted
/// vertex is shifted by `-pivot * size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
    pub pivot: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::ONE,
            pivot: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(size: Vec2, pivot: Vec2) -> Self {
        Self { size, pivot }
    }

    pub fn pivot_offset(&self) -> Vec2 {
        self.pivot * self.size
    }
}
