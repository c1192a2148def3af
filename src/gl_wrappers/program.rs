//! Exports [`Program`].
use std::ffi::CString;

use super::CompiledShader;
use crate::error::{info_log_to_string, SetupError, MAX_INFO_LOG_LEN};

/// Wrapper for an OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
#[derive(Debug)]
pub struct Program {
    /// The internal OpenGL id for this object.
    id: gl::types::GLuint,
}

/// Make a new [`Program`] from compiled shaders.
///
/// # Usage
/// ```no_run
/// # use hello_triangle::{construct_program, gl_wrappers::Shader};
/// # let (vertex_source, frag_source) = (c"", c"");
/// let vert_shader = Shader::vertex(vertex_source).compile().unwrap();
/// let frag_shader = Shader::fragment(frag_source).compile().unwrap();
/// let program = construct_program!(vert_shader, frag_shader).unwrap();
/// ```
#[macro_export]
macro_rules! construct_program {
    ($vert_sh:expr, $frag_shader:expr $(,)?) => {{
        let args = $crate::gl_wrappers::program::ProgramArgs {
            vert_shader: &$vert_sh,
            frag_shader: &$frag_shader,
        };
        $crate::gl_wrappers::program::Program::from_args(args)
    }};
}

/// Necessary shaders to create a [`Program`].
/// Use [`construct_program!`] to easily create one of these.
pub struct ProgramArgs<'a> {
    /// A vertex shader.
    pub vert_shader: &'a CompiledShader,
    /// A fragment shader.
    pub frag_shader: &'a CompiledShader,
}

impl Program {
    /// Create a new program from a [`ProgramArgs`] struct.
    ///
    /// # Errors
    /// Errors with the driver's info log if linking fails.
    pub fn from_args(args: ProgramArgs<'_>) -> Result<Self, SetupError> {
        let inner = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, args.vert_shader.id());
            gl::AttachShader(program, args.frag_shader.id());
            gl::LinkProgram(program);
            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; MAX_INFO_LOG_LEN];
                let mut length = 0;
                gl::GetProgramInfoLog(
                    program,
                    MAX_INFO_LOG_LEN as i32,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                gl::DeleteProgram(program);
                return Err(SetupError::ShaderLink {
                    log: info_log_to_string(infolog, length.max(0) as usize),
                });
            }
            // shaders may be deleted once linked; detach so they actually go
            gl::DetachShader(program, args.vert_shader.id());
            gl::DetachShader(program, args.frag_shader.id());
            program
        };
        log::debug!("linked program {inner}");

        Ok(Self { id: inner })
    }
    /// Get the internal id of this program.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    /// Make this the active program.
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }
    /// Get the location of a uniform in this program.
    ///
    /// Returns `None` for uniforms the compiler optimized out.
    ///
    /// # Panics
    /// This function panics if `name` contains interior nuls.
    pub fn get_uniform_location(&self, name: impl AsRef<str>) -> Option<gl::types::GLint> {
        let name = CString::new(name.as_ref()).unwrap();
        unsafe {
            let uniform_location = gl::GetUniformLocation(self.id, name.as_ptr().cast());
            if uniform_location < 0 {
                None
            } else {
                Some(uniform_location)
            }
        }
    }
    /// Set a `vec2` uniform. The program must be bound.
    pub fn set_uniform_vec2(&self, location: gl::types::GLint, value: &glm::Vec2) {
        unsafe { gl::Uniform2f(location, value.x, value.y) }
    }
    /// Set an `int` (or sampler) uniform. The program must be bound.
    pub fn set_uniform_i32(&self, location: gl::types::GLint, value: i32) {
        unsafe { gl::Uniform1i(location, value) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
