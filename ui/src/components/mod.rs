pub mod curve;
pub mod line_renderer;
pub mod worm;

pub use curve::CurveGenerator;
pub use line_renderer::LineRenderer;
pub use worm::Worm;
