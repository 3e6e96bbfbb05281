pub mod mesh;
pub mod vertex;
pub mod viewport;
