//! Exports [`Texture2d`].

/// Min/mag filter for a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
}

impl Filter {
    pub const fn gl_enum(self) -> gl::types::GLenum {
        match self {
            Filter::Nearest => gl::NEAREST,
            Filter::Linear => gl::LINEAR,
        }
    }
}

/// Wrap mode on one texture axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    ClampToEdge,
}

impl Wrap {
    pub const fn gl_enum(self) -> gl::types::GLenum {
        match self {
            Wrap::Repeat => gl::REPEAT,
            Wrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        }
    }
}

/// Sampling state applied to a texture at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerParams {
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
}

/// A `TEXTURE_2D` holding RGB float texels, without mipmaps.
#[derive(Debug)]
pub struct Texture2d {
    id: gl::types::GLuint,
    width: i32,
    height: i32,
}

impl Texture2d {
    /// Activate texture `unit`, create a texture there, apply `params` and upload
    /// `width * height` row-major RGB texels.
    ///
    /// The texture is left bound to `unit`.
    ///
    /// # Panics
    /// Panics if `texels.len() != width * height`.
    pub fn new_rgb_f32(
        unit: u32,
        width: i32,
        height: i32,
        params: SamplerParams,
        texels: &[[f32; 3]],
    ) -> Self {
        assert_eq!(
            texels.len(),
            (width * height) as usize,
            "texel count must match texture size"
        );
        let mut id = 0;
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                params.min_filter.gl_enum() as i32,
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                params.mag_filter.gl_enum() as i32,
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, params.wrap_s.gl_enum() as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, params.wrap_t.gl_enum() as i32);

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGB as i32,
                width,
                height,
                0,
                gl::RGB,
                gl::FLOAT,
                texels.as_ptr().cast(),
            );
        }
        log::debug!("texture {id}: {width}x{height} rgb32f on unit {unit}");
        Self { id, width, height }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl Drop for Texture2d {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) }
    }
}
