//! Fixed settings for the window and GL context.

pub const OPENGL_MAJOR_VER: u8 = 3;
pub const OPENGL_MINOR_VER: u8 = 3;

pub const START_WIDTH: u32 = 640;
pub const START_HEIGHT: u32 = 480;

pub const WINDOW_TITLE: &str = "Hello World";

/// What window and context to ask for.
///
/// There is no way to change these at runtime; [`Default`] is what the binary uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested (major, minor). Always a core profile.
    pub gl_version: (u8, u8),
    /// Create the window hidden and let the caller show it once setup is done.
    pub start_hidden: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            width: START_WIDTH,
            height: START_HEIGHT,
            gl_version: (OPENGL_MAJOR_VER, OPENGL_MINOR_VER),
            start_hidden: true,
        }
    }
}
