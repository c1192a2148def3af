//! Standalone functions and modules to wrap the nitty-gritty of
//! OpenGL objects with Rust structs.
//!
//! Every wrapper deletes its GL object on drop, so the context that created
//! it must still be current at that point.
#[macro_use]
pub mod program;
pub mod buffer;
pub mod shader;
pub mod texture;

pub use buffer::*;
pub use program::*;
pub use shader::*;
pub use texture::*;

/// Safely update the OpenGL viewport.
pub fn gl_upd_viewport(width: u32, height: u32) {
    let real_width: i32 = width.try_into().unwrap();
    let real_height: i32 = height.try_into().unwrap();
    // SAFETY:
    // gl::Viewport does not fail with non-negative values.
    unsafe {
        gl::Viewport(0, 0, real_width, real_height);
    }
}

/// Drain the GL error queue, logging every code found.
///
/// Returns how many errors were pending.
pub fn check_gl_error(when: &str) -> usize {
    let mut count = 0;
    loop {
        let error = unsafe { gl::GetError() };
        if error == gl::NO_ERROR {
            break count;
        }
        log::warn!("GL error 0x{error:04x} ({}) {when}", gl_error_name(error));
        count += 1;
        // a lost context can report errors forever
        if count >= 16 {
            break count;
        }
    }
}

/// Human name of a `glGetError` code.
pub fn gl_error_name(error: gl::types::GLenum) -> &'static str {
    match error {
        gl::NO_ERROR => "GL_NO_ERROR",
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown",
    }
}
