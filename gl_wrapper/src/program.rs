use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_char, CString};

use cgmath::{Vector3, Vector4};
use gl::types::{GLenum, GLint, GLuint};
use thiserror::Error;

const LOG_SIZE: usize = 1024;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = compile(gl::VERTEX_SHADER, self.vert)?;

        let frag = match compile(gl::FRAGMENT_SHADER, self.frag) {
            Ok(f) => f,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; LOG_SIZE];

                gl::GetProgramInfoLog(
                    program,
                    LOG_SIZE as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            Ok(Program {
                id: program,
                locations: RefCell::new(HashMap::new()),
            })
        }
    }
}

fn compile(kind: GLenum, src: &str) -> Result<GLuint, PBError> {
    let src = CString::new(src).map_err(|_| PBError::InteriorNul)?;
    let mut success: i32 = 0;

    unsafe {
        let shader = gl::CreateShader(kind);

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
        if success != 1 {
            let mut buf = [0_u8; LOG_SIZE];

            gl::GetShaderInfoLog(
                shader,
                LOG_SIZE as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            let stage = if kind == gl::VERTEX_SHADER {
                "vertex"
            } else {
                "fragment"
            };

            return Err(PBError::Compilation(stage, info_log_to_string(&buf)));
        }

        Ok(shader)
    }
}

fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0} shader compilation failed:\n{1}")]
    Compilation(&'static str, String),
    #[error("shader program linking failed:\n{0}")]
    Linking(String),
    #[error("shader source contains an interior NUL byte")]
    InteriorNul,
}

/// Value for a single named shader parameter, constant over one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Float(f32),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
}

impl Uniform {
    /// Uploads to `location` of the currently bound program.
    pub(crate) fn apply(&self, location: GLint) {
        unsafe {
            match *self {
                Uniform::Float(v) => gl::Uniform1f(location, v),
                Uniform::Vec3(v) => gl::Uniform3f(location, v.x, v.y, v.z),
                Uniform::Vec4(v) => gl::Uniform4f(location, v.x, v.y, v.z, v.w),
            }
        }
    }
}

pub struct Program {
    id: GLuint,
    locations: RefCell<HashMap<String, GLint>>,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Returns -1 for names the linker dropped or never saw, which GL
    /// silently ignores on upload.
    pub fn uniform_location(&self, name: &str) -> GLint {
        if let Some(location) = self.locations.borrow().get(name) {
            return *location;
        }

        let location = match CString::new(name) {
            Ok(c_name) => unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) },
            Err(_) => -1,
        };

        self.locations
            .borrow_mut()
            .insert(name.to_string(), location);

        location
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 32];
        buf[..12].copy_from_slice(b"0:3: error\n\0");
        buf[13] = b'x';

        assert_eq!(info_log_to_string(&buf), "0:3: error");
    }

    #[test]
    fn info_log_without_nul_uses_whole_buffer() {
        assert_eq!(info_log_to_string(b"link failed"), "link failed");
    }
}
