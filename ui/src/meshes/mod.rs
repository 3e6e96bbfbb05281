pub mod caps;
pub mod ribbon;
pub mod scale;
pub mod strip;
pub mod utils;

pub use ribbon::{RibbonMesh, RibbonTessellator};

/// Smallest chunk handed to a rayon worker by the per-point passes.
pub(crate) const PAR_MIN_LEN: usize = 32;
