//! Exports [`SetupError`], the failures that can happen before the first frame.
use std::{error::Error, fmt};

use crate::gl_wrappers::ShaderType;

/// Longest info log we read back from OpenGL, in bytes.
pub const MAX_INFO_LOG_LEN: usize = 512;

/// Everything that can go wrong while bringing the scene up.
///
/// None of these are recoverable; the binary aborts on any of them.
#[derive(Debug)]
pub enum SetupError {
    /// SDL itself, or its video subsystem, refused to start.
    WindowingInit(String),
    /// The window could not be created with the requested attributes.
    WindowCreation(String),
    /// The GL context could not be created or made current.
    GlContext(String),
    /// A shader stage failed to compile. `log` is the driver's info log.
    ShaderCompile { stage: ShaderType, log: String },
    /// The program failed to link. `log` is the driver's info log.
    ShaderLink { log: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowingInit(reason) => write!(f, "SDL init failed: {reason}"),
            Self::WindowCreation(reason) => write!(f, "window creation failed: {reason}"),
            Self::GlContext(reason) => write!(f, "GL context creation failed: {reason}"),
            Self::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader compilation failed:\n{log}")
            }
            Self::ShaderLink { log } => write!(f, "shader linker failed:\n{log}"),
        }
    }
}

impl Error for SetupError {}

/// Turn a raw info log buffer into something printable.
///
/// `written` is the length OpenGL reported; it is clamped to the buffer, and
/// anything past the first nul is dropped.
pub(crate) fn info_log_to_string(mut infolog: Vec<u8>, written: usize) -> String {
    infolog.truncate(written.min(MAX_INFO_LOG_LEN));
    if let Some(nul) = infolog.iter().position(|&b| b == 0) {
        infolog.truncate(nul);
    }
    String::from_utf8_lossy(&infolog).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = SetupError::ShaderCompile {
            stage: ShaderType::Fragment,
            log: "0:3(1): error: syntax error".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader compilation failed:\n0:3(1): error: syntax error"
        );
    }

    #[test]
    fn link_error_display() {
        let err = SetupError::ShaderLink {
            log: "missing main".to_owned(),
        };
        assert_eq!(err.to_string(), "shader linker failed:\nmissing main");
    }

    #[test]
    fn info_log_is_capped() {
        let log = vec![b'a'; 1024];
        let s = info_log_to_string(log, 1024);
        assert_eq!(s.len(), MAX_INFO_LOG_LEN);
    }

    #[test]
    fn info_log_stops_at_nul_and_trims() {
        let mut log = b"bad token\n\0garbage".to_vec();
        log.resize(MAX_INFO_LOG_LEN, 0);
        assert_eq!(info_log_to_string(log, 18), "bad token");
    }
}
