//! A single textured triangle drawn with raw OpenGL 3.3 in an SDL window.
//!
//! Setup happens once ([`window::AppWindow::init`], then [`render::Render::init`]),
//! after which the binary loops over [`render::Render::render_frame`] until the
//! window is closed.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
#[macro_use]
pub mod gl_wrappers;
pub mod logging;
pub mod render;
pub mod render_vec;
pub mod shaders;
pub mod texture;
pub mod window;

pub use gl;
pub use glm;

pub use error::SetupError;
