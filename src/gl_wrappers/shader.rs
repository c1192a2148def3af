//! Exports [`Shader`] and [`CompiledShader`].
use std::{ffi::CStr, fmt, ptr::null};

use crate::error::{info_log_to_string, SetupError, MAX_INFO_LOG_LEN};

/// An uncompiled OpenGL shader.
/// Borrows the source code necessary to compile it.
pub struct Shader<'src> {
    /// GL ID for this shader.
    inner: gl::types::GLuint,
    /// The stage this shader runs in.
    shader_type: ShaderType,
    /// The source code for this shader.
    source: &'src CStr,
    /// Ownership of `inner` moved into a [`CompiledShader`].
    was_compiled: bool,
}

/// Represents the type of a shader object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderType {
    /// This shader is a Fragment shader.
    Fragment,
    /// This shader is a Vertex shader.
    Vertex,
}

impl ShaderType {
    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
            ShaderType::Vertex => gl::VERTEX_SHADER,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderType::Fragment => "fragment",
            ShaderType::Vertex => "vertex",
        })
    }
}

impl<'src> Shader<'src> {
    /// Wrap shader source code into a type-safe Rust struct.
    ///
    /// A GL context must be current.
    pub fn new(shader_type: ShaderType, source: &'src CStr) -> Self {
        let shader = unsafe { gl::CreateShader(shader_type.gl_enum()) };
        Self {
            inner: shader,
            shader_type,
            source,
            was_compiled: false,
        }
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(source: &'src CStr) -> Self {
        Self::new(ShaderType::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(source: &'src CStr) -> Self {
        Self::new(ShaderType::Fragment, source)
    }

    /// Compile this shader.
    ///
    /// Returns a [`CompiledShader`], for use in [`Program`](super::Program)s.
    ///
    /// # Errors
    /// Errors if compilation was unsuccessful, with the response from OpenGL.
    pub fn compile(mut self) -> Result<CompiledShader, SetupError> {
        let compiled_shader = unsafe {
            gl::ShaderSource(self.inner, 1, &self.source.as_ptr(), null());
            gl::CompileShader(self.inner);

            let mut success = 0;
            gl::GetShaderiv(self.inner, gl::COMPILE_STATUS, &mut success);

            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; MAX_INFO_LOG_LEN];
                let mut length = 0;
                gl::GetShaderInfoLog(
                    self.inner,
                    MAX_INFO_LOG_LEN as i32,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                return Err(SetupError::ShaderCompile {
                    stage: self.shader_type,
                    log: info_log_to_string(infolog, length.max(0) as usize),
                });
            }
            self.was_compiled = true;
            self.inner
        };
        log::debug!("compiled {} shader {compiled_shader}", self.shader_type);
        // SAFETY: COMPILE_STATUS was checked above.
        unsafe { Ok(CompiledShader::new_unchecked(compiled_shader)) }
    }
}

impl Drop for Shader<'_> {
    fn drop(&mut self) {
        unsafe {
            if !self.was_compiled {
                gl::DeleteShader(self.inner);
            }
        }
    }
}

/// A compiled shader object.
/// This can be linked and used in [`Program`](super::Program)s.
///
/// The shader object is deleted on drop; a program it was linked into keeps working.
pub struct CompiledShader {
    /// GL ID for this compiled shader.
    id: gl::types::GLuint,
}

impl CompiledShader {
    /// Create a new CompiledShader from the GL ID of a compiled shader.
    ///
    /// # Safety
    /// The uint passed into this function MUST name a shader that compiled successfully.
    /// Otherwise, linking with this struct fails in ways we do not report.
    pub unsafe fn new_unchecked(shader: gl::types::GLuint) -> Self {
        Self { id: shader }
    }
    /// Get the internal GL ID of this shader.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        };
    }
}
