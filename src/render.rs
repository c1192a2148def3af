//! The rendering arm of the scene.
use crate::{
    error::SetupError,
    frame::{frame_draw_calls, DrawCall, CLEAR_COLOR},
    geometry::{Mesh, Triangle},
    gl_wrappers::{check_gl_error, Program, Texture2d},
    shaders::{build_scene_program, OFFSET_UNIFORM, TEXTURE_UNIFORM},
    texture::{upload_checkerboard, CHECKERBOARD_UNIT},
};

/// Every GL object the scene uses.
///
/// Must be dropped while the context that created it is still current.
pub struct Render {
    program: Program,
    mesh: Mesh,
    texture: Texture2d,
    offset_location: Option<gl::types::GLint>,
}

impl Render {
    /// Build the program, upload the triangle and the checkerboard, and leave all
    /// of them bound for the rest of the run.
    ///
    /// A GL context must be current.
    ///
    /// # Errors
    /// Shader compile or link failure.
    pub fn init() -> Result<Self, SetupError> {
        let program = build_scene_program()?;
        program.bind();

        let offset_location = program.get_uniform_location(OFFSET_UNIFORM);
        if offset_location.is_none() {
            log::warn!("uniform `{OFFSET_UNIFORM}` not found, triangles will not move");
        }
        if let Some(tex) = program.get_uniform_location(TEXTURE_UNIFORM) {
            program.set_uniform_i32(tex, CHECKERBOARD_UNIT as i32);
        }

        let mesh = Mesh::upload(&Triangle::simple());
        let texture = upload_checkerboard();

        check_gl_error("during setup");
        Ok(Render {
            program,
            mesh,
            texture,
            offset_location,
        })
    }

    pub fn clear(&mut self) {
        let [r, g, b, a] = CLEAR_COLOR;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw(&mut self, call: &DrawCall) {
        if let (Some(offset), Some(location)) = (call.offset, self.offset_location) {
            self.program.set_uniform_vec2(location, &offset);
        }
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, call.first, call.count);
        }
    }

    /// Clear and issue this frame's draws. Does not present.
    pub fn render_frame(&mut self) {
        self.clear();
        for call in frame_draw_calls(self.mesh.vertex_count()).iter() {
            self.draw(call);
        }
        check_gl_error("after drawing a frame");
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
    pub fn texture(&self) -> &Texture2d {
        &self.texture
    }
}
