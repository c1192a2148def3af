//! The fixed shader pair and the function that builds it into a program.
use std::ffi::CStr;

use crate::{construct_program, error::SetupError, gl_wrappers::Program, gl_wrappers::Shader};

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

/// Passes `pos` through, shifted in x/y by `offset`.
pub const VERT_SHADER_SOURCE: &CStr = include_cstr!("../glsl/vert_shader.glsl");
/// Samples `tex` at `gl_FragCoord / 100`. `color` is declared but never read.
pub const FRAG_SHADER_SOURCE: &CStr = include_cstr!("../glsl/frag_shader.glsl");

pub const OFFSET_UNIFORM: &str = "offset";
pub const COLOR_UNIFORM: &str = "color";
pub const TEXTURE_UNIFORM: &str = "tex";

/// Compile both stages and link them.
///
/// The intermediate shader objects are deleted before this returns, whether or
/// not linking succeeded.
///
/// # Errors
/// The first compile or link failure, carrying the driver's log.
pub fn compile_and_link(vert_source: &CStr, frag_source: &CStr) -> Result<Program, SetupError> {
    let vert_shader = Shader::vertex(vert_source).compile()?;
    let frag_shader = Shader::fragment(frag_source).compile()?;
    construct_program!(vert_shader, frag_shader)
}

/// [`compile_and_link`] on the scene's own sources.
pub fn build_scene_program() -> Result<Program, SetupError> {
    compile_and_link(VERT_SHADER_SOURCE, FRAG_SHADER_SOURCE)
}
