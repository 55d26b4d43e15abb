use cgmath::Vector3;

use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder};
use gl_wrapper::program::Program;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::Uniform;

use crate::geometry::Mesh;

/// Receiver of one frame's worth of state changes and draw calls.
///
/// Nothing is carried between frames: every frame sets the uniforms it needs
/// before each draw.
pub trait FrameTarget {
    type Geometry;

    fn clear(&mut self, color: Vector3<f32>);
    fn set_blending(&mut self, enabled: bool);
    fn set_wireframe(&mut self, enabled: bool);
    fn set_uniform(&mut self, name: &'static str, value: Uniform);
    fn draw(&mut self, geometry: &Self::Geometry);
}

/// Draws through the GL renderer with a single shared program.
pub struct GlFrame<'a> {
    pub renderer: &'a mut GlRenderer,
    pub program: &'a Program,
}

impl FrameTarget for GlFrame<'_> {
    type Geometry = Geometry;

    fn clear(&mut self, color: Vector3<f32>) {
        self.renderer.clear_color(color.x, color.y, color.z);
    }

    fn set_blending(&mut self, enabled: bool) {
        self.renderer.set_blending(enabled);
    }

    fn set_wireframe(&mut self, enabled: bool) {
        self.renderer.set_wireframe(enabled);
    }

    fn set_uniform(&mut self, name: &'static str, value: Uniform) {
        self.renderer.set_uniform(self.program, name, value);
    }

    fn draw(&mut self, geometry: &Geometry) {
        self.renderer.draw(geometry, self.program);
    }
}

pub fn upload(mesh: Mesh) -> Result<Geometry, GBError> {
    let mut builder = GeometryBuilder::new(&mesh.vertices)
        .with_attribute(mesh.layout)
        .with_primitive(mesh.primitive);

    if let Some(indices) = &mesh.indices {
        builder = builder.with_indices(indices);
    }

    builder.build()
}
