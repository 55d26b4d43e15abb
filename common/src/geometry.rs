use std::f32::consts::PI;

use gl_wrapper::geometry::VertexAttribute;
use gl_wrapper::Primitive;

/// Vertex data built once at startup and handed to the GL side for upload.
pub struct Mesh {
    pub vertices: Vec<f32>,
    pub indices: Option<Vec<u32>>,
    pub layout: VertexAttribute,
    pub primitive: Primitive,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.size()
    }
}

/// Upward pointing triangle in the plane `z`.
pub fn triangle(z: f32) -> Mesh {
    #[rustfmt::skip]
    let vertices = vec![
        -0.5, -0.5, z,
        0.5, -0.5, z,
        0.0, 0.5, z,
    ];

    Mesh {
        vertices,
        indices: None,
        layout: VertexAttribute::Vec3,
        primitive: Primitive::Triangles,
    }
}

/// Filled disc as a fan of `segments` triangles around the origin.
///
/// Vertex 0 is the centre; the last triangle closes back onto vertex 1.
pub fn circle(segments: u32, radius: f32) -> Mesh {
    let mut vertices = Vec::with_capacity((segments as usize + 1) * 2);
    vertices.extend_from_slice(&[0.0, 0.0]);

    for i in 0..segments {
        let angle = 2.0 * PI * i as f32 / segments as f32;
        vertices.push(radius * angle.cos());
        vertices.push(radius * angle.sin());
    }

    let indices = (0..segments)
        .flat_map(|i| [0, i + 1, (i + 1) % segments + 1])
        .collect();

    Mesh {
        vertices,
        indices: Some(indices),
        layout: VertexAttribute::Vec2,
        primitive: Primitive::Triangles,
    }
}

/// Rectangle from the origin straight up to `length`, as two indexed triangles.
pub fn hand(half_width: f32, length: f32) -> Mesh {
    #[rustfmt::skip]
    let vertices = vec![
        -half_width, 0.0,
        half_width, 0.0,
        -half_width, length,
        half_width, length,
    ];

    Mesh {
        vertices,
        indices: Some(vec![0, 1, 2, 1, 3, 2]),
        layout: VertexAttribute::Vec2,
        primitive: Primitive::Triangles,
    }
}

/// Tick lines at 12, 3, 6 and 9 o'clock spanning `inner..outer`.
pub fn markers(inner: f32, outer: f32) -> Mesh {
    #[rustfmt::skip]
    let vertices = vec![
        0.0, inner, 0.0, outer,
        inner, 0.0, outer, 0.0,
        0.0, -inner, 0.0, -outer,
        -inner, 0.0, -outer, 0.0,
    ];

    Mesh {
        vertices,
        indices: None,
        layout: VertexAttribute::Vec2,
        primitive: Primitive::Lines,
    }
}
