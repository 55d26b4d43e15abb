pub mod geometry;
pub mod program;
pub mod renderer;
pub mod window;

pub use geometry::Primitive;
pub use program::Uniform;
