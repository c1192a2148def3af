//! SDL window and GL context setup.
use std::ffi::CStr;

use sdl2::{
    event::{Event, WindowEvent},
    video,
};

use crate::{config::WindowConfig, error::SetupError, gl_wrappers::gl_upd_viewport};

/// The window, its current GL context and the event pump feeding it.
///
/// Fields drop in declaration order: context before window before SDL.
pub struct AppWindow {
    gl_ctx: video::GLContext,
    window: video::Window,
    event_pump: sdl2::EventPump,
    _video_ctx: sdl2::VideoSubsystem,
    _sdl_ctx: sdl2::Sdl,
}

impl AppWindow {
    /// Open a window with a core-profile context, make the context current on
    /// this thread and load GL entry points.
    ///
    /// # Errors
    /// SDL init, window creation, or context creation failing. Nothing is retried.
    pub fn init(config: &WindowConfig) -> Result<Self, SetupError> {
        let sdl_ctx = sdl2::init().map_err(SetupError::WindowingInit)?;
        let video_ctx = sdl_ctx.video().map_err(SetupError::WindowingInit)?;
        video_ctx
            .gl_load_library_default()
            .map_err(SetupError::WindowingInit)?;

        let gl_attr = video_ctx.gl_attr();
        gl_attr.set_context_flags().forward_compatible().set();
        gl_attr.set_context_major_version(config.gl_version.0);
        gl_attr.set_context_minor_version(config.gl_version.1);
        gl_attr.set_context_profile(video::GLProfile::Core);

        let mut builder = video_ctx.window(&config.title, config.width, config.height);
        builder.position_centered().opengl();
        if config.start_hidden {
            builder.hidden();
        }
        let window = builder
            .build()
            .map_err(|e| SetupError::WindowCreation(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(SetupError::GlContext)?;
        window
            .gl_make_current(&gl_ctx)
            .map_err(SetupError::GlContext)?;
        gl::load_with(|s| video_ctx.gl_get_proc_address(s).cast());

        let event_pump = sdl_ctx.event_pump().map_err(SetupError::WindowingInit)?;

        log::info!(
            "opened {}x{} window `{}`, requested GL {}.{} core",
            config.width,
            config.height,
            config.title,
            config.gl_version.0,
            config.gl_version.1,
        );
        log::info!(
            "GL version: {}, renderer: {}",
            gl_string(gl::VERSION),
            gl_string(gl::RENDERER)
        );

        gl_upd_viewport(config.width, config.height);

        Ok(Self {
            gl_ctx,
            window,
            event_pump,
            _video_ctx: video_ctx,
            _sdl_ctx: sdl_ctx,
        })
    }

    /// Make a hidden window visible.
    pub fn show(&mut self) {
        self.window.show();
    }

    /// Present the back buffer.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    /// Drain pending events. Returns whether the window was asked to close.
    pub fn poll_close_requested(&mut self) -> bool {
        let main_id = self.window.id();
        let mut close = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => close = true,
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Close,
                    ..
                } if window_id == main_id => close = true,
                _ => {}
            }
        }
        close
    }

    pub fn gl_ctx(&self) -> &video::GLContext {
        &self.gl_ctx
    }
    pub fn window(&self) -> &video::Window {
        &self.window
    }
}

/// Read a `glGetString` value, or `"?"` if the driver returns null.
fn gl_string(name: gl::types::GLenum) -> String {
    // SAFETY: glGetString returns null or a static nul-terminated string.
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            "?".to_owned()
        } else {
            CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
        }
    }
}
