use std::ffi::c_void;

use gl::types::GLenum;
use thiserror::Error;

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: Option<&'a [u32]>,
    primitive: Primitive,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            indices: None,
            primitive: Primitive::Triangles,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    fn validate(&self) -> Result<(usize, usize), GBError> {
        let total_len: usize = self.attributes.iter().map(|a| a.size()).sum();

        if total_len == 0 || self.data.len() % total_len != 0 {
            return Err(GBError::InvalidDataLength);
        }

        let vertices = self.data.len() / total_len;

        if let Some(indices) = self.indices {
            if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertices) {
                return Err(GBError::IndexOutOfRange(bad, vertices));
            }
        }

        Ok((total_len, vertices))
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let (total_len, vertices) = self.validate()?;

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = None;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(self.data) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            if let Some(indices) = self.indices {
                let mut id = 0;
                gl::GenBuffers(1, (&mut id) as *mut u32);
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    std::mem::size_of_val(indices) as isize,
                    indices.as_ptr() as *const c_void,
                    gl::STATIC_DRAW,
                );
                ebo = Some(id);
            }

            let mut offset = 0;

            for (i, attr) in self.attributes.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (total_len * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                offset += attr.size();
                gl::EnableVertexAttribArray(i as u32);
            }

            // the element buffer binding is VAO state, so only the array buffer is unbound
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        let count = match self.indices {
            Some(indices) => indices.len(),
            None => vertices,
        };

        Ok(Geometry {
            vao,
            vbo,
            ebo,
            count,
            primitive: self.primitive,
        })
    }
}

#[derive(Debug, Error)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Index {0} out of range for {1} vertices")]
    IndexOutOfRange(u32, usize),
}

pub enum VertexAttribute {
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

impl Primitive {
    pub fn gl_mode(&self) -> GLenum {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::Lines => gl::LINES,
        }
    }
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    ebo: Option<u32>,
    count: usize,
    primitive: Primitive,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }

    /// Number of vertices (or indices, for indexed geometry) one draw consumes.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_indexed(&self) -> bool {
        self.ebo.is_some()
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = &self.ebo {
                gl::DeleteBuffers(1, ebo as *const u32);
            }
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_partial_vertex() {
        let data = [0.0; 5];
        let builder = GeometryBuilder::new(&data).with_attribute(VertexAttribute::Vec2);

        assert!(matches!(builder.validate(), Err(GBError::InvalidDataLength)));
    }

    #[test]
    fn rejects_missing_attributes() {
        let data = [0.0; 6];

        assert!(matches!(
            GeometryBuilder::new(&data).validate(),
            Err(GBError::InvalidDataLength)
        ));
    }

    #[test]
    fn rejects_index_past_last_vertex() {
        let data = [0.0; 8];
        let indices = [0, 1, 2, 1, 4, 2];
        let builder = GeometryBuilder::new(&data)
            .with_attribute(VertexAttribute::Vec2)
            .with_indices(&indices);

        assert!(matches!(
            builder.validate(),
            Err(GBError::IndexOutOfRange(4, 4))
        ));
    }

    #[test]
    fn attribute_sizes_are_components_per_vertex() {
        assert_eq!(VertexAttribute::Vec2.size(), 2);
        assert_eq!(VertexAttribute::Vec3.size(), 3);
    }

    #[test]
    fn counts_vertices_per_attribute_layout() {
        let data = [0.0; 9];
        let builder = GeometryBuilder::new(&data).with_attribute(VertexAttribute::Vec3);

        assert_eq!(builder.validate().unwrap(), (3, 3));
    }
}
