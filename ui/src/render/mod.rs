pub mod renderer;

pub use renderer::{mesh::CpuMesh, vertex::Vertex, viewport::Viewport};
